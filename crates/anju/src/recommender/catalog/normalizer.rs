/// Splits a comma separated token list, dropping blank entries.
pub(crate) fn split_tokens(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Strips byte-order marks and zero-width spaces left behind by spreadsheet exports.
pub(crate) fn clean_cell(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_tokens_trims_and_filters() {
        assert_eq!(split_tokens("a, b ,,c,  "), vec!["a", "b", "c"]);
        assert!(split_tokens(" , ").is_empty());
    }

    #[test]
    fn clean_cell_removes_invisible_characters() {
        assert_eq!(clean_cell("\u{feff} Spicy\u{200b} "), "Spicy");
    }
}

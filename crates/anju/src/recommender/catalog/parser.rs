use super::normalizer::{clean_cell, split_tokens};
use super::{CatalogError, CatalogTable};
use crate::recommender::domain::{Dish, Profile, Question, QuestionNumber};
use serde::{Deserialize, Deserializer};
use std::io::Read;

const HEADER_LINES: usize = 1;

pub(crate) fn parse_profiles<R: Read>(reader: R) -> Result<Vec<Profile>, CatalogError> {
    let mut profiles = Vec::new();

    for (index, record) in csv_reader(reader).deserialize::<ProfileRow>().enumerate() {
        let row = record.map_err(|source| CatalogError::csv(CatalogTable::Profiles, source))?;
        let line = index + HEADER_LINES + 1;

        let keyword = required(CatalogTable::Profiles, line, "keyword", row.keyword)?;
        let core_combo = required(CatalogTable::Profiles, line, "core_combo", row.core_combo)?;
        if split_tokens(&core_combo).is_empty() {
            return Err(CatalogError::MissingField {
                table: CatalogTable::Profiles,
                line,
                field: "core_combo",
            });
        }

        profiles.push(Profile {
            keyword,
            core_combo,
            description: row.description.map(|value| clean_cell(&value)),
        });
    }

    Ok(profiles)
}

pub(crate) fn parse_dishes<R: Read>(reader: R) -> Result<Vec<Dish>, CatalogError> {
    let mut dishes = Vec::new();

    for (index, record) in csv_reader(reader).deserialize::<DishRow>().enumerate() {
        let row = record.map_err(|source| CatalogError::csv(CatalogTable::Dishes, source))?;
        let line = index + HEADER_LINES + 1;

        let name = required(CatalogTable::Dishes, line, "name", row.name)?;
        let raw_level = required(CatalogTable::Dishes, line, "spicy_level", row.spicy_level)?;
        let spicy_level = parse_spicy_level(&raw_level).ok_or(CatalogError::InvalidSpicyLevel {
            line,
            value: raw_level,
        })?;

        dishes.push(Dish {
            name,
            spicy_level,
            category: row.category.map(|value| clean_cell(&value)),
        });
    }

    Ok(dishes)
}

pub(crate) fn parse_questions<R: Read>(reader: R) -> Result<Vec<Question>, CatalogError> {
    let mut questions = Vec::new();

    for (index, record) in csv_reader(reader).deserialize::<QuestionRow>().enumerate() {
        let row = record.map_err(|source| CatalogError::csv(CatalogTable::Questions, source))?;
        let line = index + HEADER_LINES + 1;

        let question = required(CatalogTable::Questions, line, "question", row.question)?;
        let options: Vec<String> = [row.option_1, row.option_2, row.option_3, row.option_4]
            .into_iter()
            .flatten()
            .map(|option| clean_cell(&option))
            .filter(|option| !option.is_empty())
            .collect();

        if options.is_empty() {
            return Err(CatalogError::NoOptions { q_no: row.q_no });
        }

        questions.push(Question {
            q_no: row.q_no,
            question,
            options,
        });
    }

    Ok(questions)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn required(
    table: CatalogTable,
    line: usize,
    field: &'static str,
    value: Option<String>,
) -> Result<String, CatalogError> {
    value
        .map(|raw| clean_cell(&raw))
        .filter(|cleaned| !cleaned.is_empty())
        .ok_or(CatalogError::MissingField { table, line, field })
}

fn parse_spicy_level(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|level| level.is_finite() && *level >= 0.0)
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    keyword: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    core_combo: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DishRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    spicy_level: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    q_no: QuestionNumber,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    question: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    option_1: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    option_2: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    option_3: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    option_4: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::catalog::normalizer::split_tokens;

/// Question number as used by the question set and the weight table.
pub type QuestionNumber = u32;

/// Named cluster of taste preferences with its matching tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub keyword: String,
    pub core_combo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Profile {
    pub fn new(keyword: impl Into<String>, core_combo: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            core_combo: core_combo.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Trimmed, non-empty tokens of `core_combo`.
    pub fn tokens(&self) -> Vec<&str> {
        split_tokens(&self.core_combo)
    }

    /// Number of tokens that occur verbatim inside `answer`.
    pub fn match_count(&self, answer: &str) -> usize {
        self.tokens()
            .into_iter()
            .filter(|token| answer.contains(token))
            .count()
    }
}

/// Candidate dish with its spiciness on the catalog scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub spicy_level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Dish {
    pub fn new(name: impl Into<String>, spicy_level: f64) -> Self {
        Self {
            name: name.into(),
            spicy_level,
            category: None,
        }
    }
}

/// One quiz prompt and its selectable option texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub q_no: QuestionNumber,
    pub question: String,
    pub options: Vec<String>,
}

/// Immutable, ordered profile table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileCatalog {
    profiles: Vec<Profile>,
}

impl ProfileCatalog {
    pub fn new(profiles: Vec<Profile>) -> Result<Self, DuplicateKeyword> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.keyword.as_str()) {
                return Err(DuplicateKeyword(profile.keyword.clone()));
            }
        }
        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, keyword: &str) -> Option<&Profile> {
        self.profiles
            .iter()
            .find(|profile| profile.keyword == keyword)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("profile keyword '{0}' appears more than once")]
pub struct DuplicateKeyword(pub String);

/// Immutable dish table in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DishCatalog {
    dishes: Vec<Dish>,
}

impl DishCatalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

/// Quiz questions sorted by question number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(mut questions: Vec<Question>) -> Result<Self, DuplicateQuestion> {
        questions.sort_by_key(|question| question.q_no);
        for pair in questions.windows(2) {
            if pair[0].q_no == pair[1].q_no {
                return Err(DuplicateQuestion(pair[0].q_no));
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, q_no: QuestionNumber) -> Option<&Question> {
        self.questions
            .binary_search_by_key(&q_no, |question| question.q_no)
            .ok()
            .map(|index| &self.questions[index])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Checks that `answers` holds exactly one entry per question.
    pub fn validate_answers(&self, answers: &AnswerSet) -> Result<(), AnswerError> {
        if let Some(missing) = self
            .questions
            .iter()
            .find(|question| answers.get(question.q_no).is_none())
        {
            return Err(AnswerError::Incomplete {
                missing: missing.q_no,
                expected: self.questions.len(),
                answered: answers.len(),
            });
        }

        if let Some(unknown) = answers.question_numbers().find(|q_no| self.get(*q_no).is_none()) {
            return Err(AnswerError::UnknownQuestion(unknown));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("question number {0} appears more than once")]
pub struct DuplicateQuestion(pub QuestionNumber);

/// Answer text selected for each question, keyed by question number.
///
/// JSON object keys such as `"1"` deserialize into question numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionNumber, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer for `q_no`, replacing an earlier one.
    pub fn insert(&mut self, q_no: QuestionNumber, answer: impl Into<String>) -> Option<String> {
        self.answers.insert(q_no, answer.into())
    }

    pub fn get(&self, q_no: QuestionNumber) -> Option<&str> {
        self.answers.get(&q_no).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionNumber, &str)> {
        self.answers
            .iter()
            .map(|(q_no, answer)| (*q_no, answer.as_str()))
    }

    pub fn question_numbers(&self) -> impl Iterator<Item = QuestionNumber> + '_ {
        self.answers.keys().copied()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.answers.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(QuestionNumber, S)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionNumber, S)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(q_no, answer)| (q_no, answer.into()))
                .collect(),
        }
    }
}

/// Answer set does not line up with the question set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("question {missing} is unanswered ({answered} of {expected} answers supplied)")]
    Incomplete {
        missing: QuestionNumber,
        expected: usize,
        answered: usize,
    },
    #[error("answer supplied for unknown question {0}")]
    UnknownQuestion(QuestionNumber),
}

use crate::recommender::domain::QuestionNumber;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tunable constants for profile matching and dish ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub question_weights: QuestionWeights,
    pub markers: PreferenceMarkers,
    pub profile_jitter: f64,
    pub dish_jitter: f64,
    pub spicy_scale_max: f64,
    pub soup_penalty_factor: f64,
    pub top_n: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            question_weights: QuestionWeights::default(),
            markers: PreferenceMarkers::default(),
            profile_jitter: 0.3,
            dish_jitter: 0.5,
            spicy_scale_max: 5.0,
            soup_penalty_factor: 0.5,
            top_n: 5,
        }
    }
}

impl ScoringConfig {
    /// Same constants with both jitter bounds zeroed.
    pub fn without_jitter(mut self) -> Self {
        self.profile_jitter = 0.0;
        self.dish_jitter = 0.0;
        self
    }
}

/// Influence of each question on profile scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionWeights {
    pub weights: BTreeMap<QuestionNumber, u32>,
    pub default_weight: u32,
}

impl QuestionWeights {
    pub fn weight(&self, q_no: QuestionNumber) -> u32 {
        self.weights
            .get(&q_no)
            .copied()
            .unwrap_or(self.default_weight)
    }
}

impl Default for QuestionWeights {
    fn default() -> Self {
        Self {
            weights: BTreeMap::from([(1, 3), (2, 3), (3, 2), (4, 2)]),
            default_weight: 1,
        }
    }
}

/// Marker tokens that feed the dish preference counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceMarkers {
    pub spicy: Vec<String>,
    pub mild: Vec<String>,
    pub soup: Vec<String>,
}

impl Default for PreferenceMarkers {
    fn default() -> Self {
        Self {
            spicy: vec!["spicy".to_string()],
            mild: vec!["mild".to_string()],
            soup: vec!["soup".to_string()],
        }
    }
}

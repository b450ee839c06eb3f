mod config;
mod dish;
mod profile;

pub use config::{PreferenceMarkers, QuestionWeights, ScoringConfig};
pub use dish::{base_score, PreferenceCounts};

use super::domain::{AnswerSet, Dish, DishCatalog, Profile, ProfileCatalog};
use super::jitter::JitterSource;
use serde::{Deserialize, Serialize};

/// Stateless scorer applying a [`ScoringConfig`] to one answer set at a time.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Picks the best matching profile. Jitter is drawn once per profile, in catalog order.
    pub fn match_profile<J: JitterSource + ?Sized>(
        &self,
        answers: &AnswerSet,
        catalog: &ProfileCatalog,
        jitter: &mut J,
    ) -> Result<ProfileMatch, ScoringError> {
        profile::match_profile(answers, catalog, &self.config, jitter)
    }

    pub fn preference_counts(&self, answers: &AnswerSet) -> PreferenceCounts {
        PreferenceCounts::from_answers(answers, &self.config.markers)
    }

    /// Top dishes for `answers`, highest score first.
    pub fn rank_dishes<J: JitterSource + ?Sized>(
        &self,
        answers: &AnswerSet,
        catalog: &DishCatalog,
        jitter: &mut J,
    ) -> Vec<RankedDish> {
        self.rank_dishes_with_counts(self.preference_counts(answers), catalog, jitter)
    }

    pub fn rank_dishes_with_counts<J: JitterSource + ?Sized>(
        &self,
        counts: PreferenceCounts,
        catalog: &DishCatalog,
        jitter: &mut J,
    ) -> Vec<RankedDish> {
        dish::rank_dishes(counts, catalog, &self.config, jitter)
    }
}

/// Accumulated score of one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileScore {
    pub keyword: String,
    pub base_score: u32,
    pub jitter: f64,
    pub total: f64,
}

/// Winning profile plus the score table it was chosen from, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMatch {
    pub profile: Profile,
    pub scores: Vec<ProfileScore>,
}

/// Dish with its final score; `base_score` excludes jitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDish {
    pub dish: Dish,
    pub base_score: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("profile catalog is empty; no profile can be matched")]
    EmptyProfileCatalog,
}

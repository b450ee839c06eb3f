use super::domain::{AnswerError, AnswerSet, DishCatalog, Profile, ProfileCatalog, QuestionSet};
use super::jitter::JitterSource;
use super::scoring::{
    PreferenceCounts, ProfileScore, RankedDish, ScoringConfig, ScoringEngine, ScoringError,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Matched profile and ranked dishes for one completed quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub profile: Profile,
    pub dishes: Vec<RankedDish>,
    pub profile_scores: Vec<ProfileScore>,
    pub preferences: PreferenceCounts,
}

impl Recommendation {
    pub fn dish_names(&self) -> Vec<&str> {
        self.dishes
            .iter()
            .map(|ranked| ranked.dish.name.as_str())
            .collect()
    }
}

/// Single entry point combining profile matching and dish ranking.
#[derive(Debug, Clone, Default)]
pub struct ResultCalculator {
    engine: ScoringEngine,
}

impl ResultCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            engine: ScoringEngine::new(config),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Scores `answers` against both catalogs.
    ///
    /// Profile jitter is drawn before dish jitter, so a seeded source yields
    /// identical output for identical inputs.
    pub fn calculate<J: JitterSource + ?Sized>(
        &self,
        answers: &AnswerSet,
        profiles: &ProfileCatalog,
        dishes: &DishCatalog,
        jitter: &mut J,
    ) -> Result<Recommendation, RecommendError> {
        let matched = self.engine.match_profile(answers, profiles, jitter)?;
        let preferences = self.engine.preference_counts(answers);
        let ranked = self
            .engine
            .rank_dishes_with_counts(preferences, dishes, jitter);

        info!(
            profile = %matched.profile.keyword,
            dishes = ranked.len(),
            "recommendation calculated"
        );

        Ok(Recommendation {
            profile: matched.profile,
            dishes: ranked,
            profile_scores: matched.scores,
            preferences,
        })
    }

    /// Like [`ResultCalculator::calculate`], refusing answer sets that do not
    /// cover `questions` exactly.
    pub fn calculate_for_quiz<J: JitterSource + ?Sized>(
        &self,
        questions: &QuestionSet,
        answers: &AnswerSet,
        profiles: &ProfileCatalog,
        dishes: &DishCatalog,
        jitter: &mut J,
    ) -> Result<Recommendation, RecommendError> {
        questions.validate_answers(answers)?;
        self.calculate(answers, profiles, dishes, jitter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendError {
    #[error(transparent)]
    Answers(#[from] AnswerError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

use std::sync::Arc;

use super::calculator::{Recommendation, RecommendError, ResultCalculator};
use super::catalog::Catalogs;
use super::domain::AnswerSet;
use super::jitter::SeededJitter;
use super::scoring::ScoringConfig;
use super::session::QuizSession;

/// Shares the read-only catalogs across callers; every call gets its own jitter source.
pub struct RecommendationService {
    catalogs: Arc<Catalogs>,
    calculator: ResultCalculator,
    seed: Option<u64>,
}

impl RecommendationService {
    pub fn new(catalogs: Arc<Catalogs>, config: ScoringConfig, seed: Option<u64>) -> Self {
        Self {
            catalogs,
            calculator: ResultCalculator::new(config),
            seed,
        }
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn calculator(&self) -> &ResultCalculator {
        &self.calculator
    }

    /// Fresh quiz walk over the shared question set.
    pub fn session(&self) -> QuizSession<'_> {
        QuizSession::new(&self.catalogs.questions)
    }

    /// Validates `answers` against the question set and scores them.
    ///
    /// `seed` overrides the configured seed; with neither, jitter comes from OS entropy.
    pub fn recommend(
        &self,
        answers: &AnswerSet,
        seed: Option<u64>,
    ) -> Result<Recommendation, RecommendError> {
        let mut jitter = SeededJitter::from_optional_seed(seed.or(self.seed));
        self.calculator.calculate_for_quiz(
            &self.catalogs.questions,
            answers,
            &self.catalogs.profiles,
            &self.catalogs.dishes,
            &mut jitter,
        )
    }
}

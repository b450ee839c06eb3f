//! Quiz answers in, flavor profile and dish ranking out.
//!
//! Reference tables are loaded once through [`catalog`] and never mutated. Each
//! call to the [`ResultCalculator`] is a pure function of the answer set, the
//! catalogs, and the [`JitterSource`] it is handed.

mod calculator;
pub mod catalog;
pub mod domain;
pub mod jitter;
pub mod router;
pub mod scoring;
mod service;
mod session;

#[cfg(test)]
mod tests;

pub use calculator::{Recommendation, RecommendError, ResultCalculator};
pub use catalog::{load_catalogs, CatalogError, CatalogLoader, CatalogTable, Catalogs};
pub use domain::{
    AnswerError, AnswerSet, Dish, DishCatalog, Profile, ProfileCatalog, Question, QuestionNumber,
    QuestionSet,
};
pub use jitter::{JitterSource, NoJitter, SeededJitter};
pub use router::{recommendation_router, RecommendationRequest};
pub use scoring::{
    PreferenceCounts, ProfileMatch, ProfileScore, RankedDish, ScoringConfig, ScoringEngine,
    ScoringError,
};
pub use service::RecommendationService;
pub use session::{QuizSession, SessionError};

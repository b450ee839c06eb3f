pub mod config;
pub mod error;
pub mod recommender;
pub mod telemetry;

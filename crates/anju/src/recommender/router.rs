use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::calculator::RecommendError;
use super::domain::{AnswerSet, Profile, Question};
use super::service::RecommendationService;

/// Body of `POST /api/v1/recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub answers: AnswerSet,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Router exposing the quiz reference data and the result calculator.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/profiles", get(profiles_handler))
        .route("/api/v1/recommendations", post(recommend_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<RecommendationService>>,
) -> Json<Vec<Question>> {
    Json(service.catalogs().questions.questions().to_vec())
}

pub(crate) async fn profiles_handler(
    State(service): State<Arc<RecommendationService>>,
) -> Json<Vec<Profile>> {
    Json(service.catalogs().profiles.profiles().to_vec())
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    match service.recommend(&request.answers, request.seed) {
        Ok(recommendation) => (StatusCode::OK, Json(recommendation)).into_response(),
        Err(error @ RecommendError::Answers(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(error @ RecommendError::Scoring(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

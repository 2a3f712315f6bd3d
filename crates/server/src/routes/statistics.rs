//! Aggregate statistics endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/statistics` - Headline counts, rates and means
//! - `GET /api/survival-by-class` - Survival per ticket class
//! - `GET /api/survival-by-gender` - Survival per sex
//! - `GET /api/age-distribution` - Non-empty ten-year age buckets

use axum::Json;
use axum::extract::State;

use analytics::{AgeBucket, ClassSurvival, GenderSurvival, Summary};

use crate::state::ServerState;

/// `GET /api/statistics`
pub async fn get_statistics(State(state): State<ServerState>) -> Json<Summary> {
    Json(analytics::summary_statistics(&state.dataset))
}

/// `GET /api/survival-by-class`
pub async fn get_survival_by_class(State(state): State<ServerState>) -> Json<Vec<ClassSurvival>> {
    Json(analytics::survival_by_class(&state.dataset))
}

/// `GET /api/survival-by-gender`
pub async fn get_survival_by_gender(
    State(state): State<ServerState>,
) -> Json<Vec<GenderSurvival>> {
    Json(analytics::survival_by_gender(&state.dataset))
}

/// `GET /api/age-distribution`
pub async fn get_age_distribution(State(state): State<ServerState>) -> Json<Vec<AgeBucket>> {
    Json(analytics::age_distribution(&state.dataset))
}

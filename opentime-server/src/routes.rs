use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use opentime_core::clock::format_timestamp;
use opentime_core::{Evaluation, Listing};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

pub const HEALTH_PATH: &str = "/health";
pub const OPEN_TIME_PATH: &str = "/api/v1/open-time";

/// All routes; anything else falls through to axum's default 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(OPEN_TIME_PATH, get(list_open_times))
        .route("/api/v1/open-time/:parameter", get(get_open_time))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: format_timestamp(&state.clock.now()),
    })
}

async fn list_open_times(State(state): State<AppState>) -> Json<Listing> {
    Json(state.registry.listing(&state.clock.now()))
}

async fn get_open_time(
    State(state): State<AppState>,
    Path(parameter): Path<String>,
) -> Result<Json<Evaluation>, ApiError> {
    let evaluation = state.registry.evaluate(&parameter, &state.clock.now())?;
    tracing::debug!(
        parameter = %parameter,
        is_open = evaluation.status.is_open,
        current_time = %evaluation.current_time,
        "evaluated window"
    );
    Ok(Json(evaluation))
}

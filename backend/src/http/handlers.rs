//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the layout itself.

use axum::{extract::State, Json};

use super::dto::{HealthResponse, LayoutRequest};
use super::error::AppError;
use super::state::AppState;
use crate::api::TimelineLayout;
use crate::config::TimelineConfig;
use crate::models::Period;
use crate::services::timeline::{build_layout, filter_by_year};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Configuration
// =============================================================================

/// GET /v1/config
///
/// Return the layout configuration the server was started with.
pub async fn get_config(State(state): State<AppState>) -> HandlerResult<TimelineConfig> {
    Ok(Json(state.config.as_ref().clone()))
}

// =============================================================================
// Layout
// =============================================================================

/// POST /v1/timeline/layout
///
/// Lay out the posted periods. Settings in the request override the server
/// configuration for this call only.
pub async fn compute_layout(
    State(state): State<AppState>,
    Json(request): Json<LayoutRequest>,
) -> HandlerResult<TimelineLayout> {
    let settings = request.resolve_settings(&state.config.layout)?;

    let periods = request
        .periods
        .into_iter()
        .map(|dto| dto.into_period(settings.zone))
        .collect::<Result<Vec<Period>, _>>()?;

    let periods = match request.year {
        Some(year) => filter_by_year(&periods, year),
        None => periods,
    };

    tracing::debug!(
        periods = periods.len(),
        view_mode = ?settings.view_mode,
        "Computing timeline layout"
    );

    Ok(Json(build_layout(&periods, &settings)))
}

//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Timeline input or configuration error
    Timeline(TimelineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Timeline(e) => match &e {
                TimelineError::InvalidDate { value, .. } => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("INVALID_DATE", e.to_string()).with_details(value.clone()),
                ),
                TimelineError::InvalidPeriod { id, .. } => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("INVALID_PERIOD", e.to_string()).with_details(id.clone()),
                ),
                // Request overrides are validated as configuration.
                TimelineError::Configuration { .. } => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("INVALID_SETTINGS", e.to_string()),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<TimelineError> for AppError {
    fn from(err: TimelineError) -> Self {
        AppError::Timeline(err)
    }
}

// src/error.rs
//! Error types for the chat round trip.
//!
//! Handlers return `Result<T, AppError>`. Upstream failures are logged with
//! their detail, but the caller only ever sees a generic `{"error": ...}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Failures of the completion provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream rejected our credential (401/403).
    #[error("upstream rejected credentials (status {0})")]
    Auth(u16),

    /// Upstream quota or rate limit hit (429).
    #[error("upstream rate limit or quota exceeded")]
    RateLimited,

    #[error("upstream unreachable: {0}")]
    Network(String),

    #[error("upstream did not answer in time")]
    Timeout,

    /// Upstream answered, but not with a usable completion.
    #[error("malformed upstream response: {0}")]
    Malformed(String),

    #[error("upstream returned status {0}")]
    Status(u16),
}

impl UpstreamError {
    /// HTTP status returned to our caller for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            UpstreamError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            UpstreamError::RateLimited | UpstreamError::Network(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            UpstreamError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            UpstreamError::Malformed(_) | UpstreamError::Status(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn client_message(&self) -> &'static str {
        match self {
            UpstreamError::Auth(_) => "upstream authentication failed",
            UpstreamError::RateLimited => "upstream is rate limiting requests",
            UpstreamError::Network(_) => "upstream is unreachable",
            UpstreamError::Timeout => "upstream timed out",
            UpstreamError::Malformed(_) => "upstream returned an invalid response",
            UpstreamError::Status(_) => "upstream request failed",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else if e.is_decode() {
            UpstreamError::Malformed(e.to_string())
        } else {
            UpstreamError::Network(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Upstream(e) = &self;
        let status = e.status_code();
        match e {
            UpstreamError::RateLimited | UpstreamError::Timeout => {
                warn!(error = %e, "chat upstream failure")
            }
            _ => error!(error = %e, "chat upstream failure"),
        }
        (status, Json(json!({ "error": e.client_message() }))).into_response()
    }
}

//! Application error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;

/// Every failure a handler can surface
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required query parameter was missing or empty
    #[error("{0}")]
    MissingParameter(String),

    /// The environment variable holding a provider key was not set at startup
    #[error("{0} is not set")]
    MissingCredential(String),

    /// Network failure, non-2xx status or undecodable body from an outbound call
    #[error("{0}")]
    HttpClient(#[from] reqwest::Error),

    /// The provider answered but reported a failure
    #[error("{0}")]
    Upstream(String),

    #[error("invalid publishedAt timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("{0}")]
    InvalidArticle(String),

    /// Anything outside the request-failure tier of the fantasy lookups
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_client_error() {
            warn!(status = %status, error = %message, "Rejected request");
        } else {
            error!(status = %status, error = %message, "Request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

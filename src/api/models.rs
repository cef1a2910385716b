//! API query parameters and response bodies

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, Result};

/// `/get_nfl_news` query
#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewsQuery {
    /// Player or topic to search news for
    pub player: Option<String>,
}

/// `/get_user` query
#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Fantasy platform username
    pub username: Option<String>,
}

/// `/get_league` and `/get_roster` query
#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeagueQuery {
    /// Fantasy platform league identifier
    #[serde(rename = "leagueId")]
    pub league_id: Option<String>,
}

/// `/chatbot` query
#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChatbotQuery {
    /// Free-text message to route
    pub message: Option<String>,
}

/// Body used by the chat and news handlers
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ChatReply {
    pub response: Option<String>,
}

impl ChatReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }
}

/// Error body returned by every handler
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Unwrap a required parameter, rejecting absent and empty values with `message`
pub fn required(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::MissingParameter(message.to_string())),
    }
}

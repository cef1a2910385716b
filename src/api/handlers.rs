//! HTTP request handlers

use crate::api::models::{
    required, ChatReply, ChatbotQuery, HealthResponse, LeagueQuery, NewsQuery, UserQuery,
};
use crate::error::AppError;
use crate::intent::Intent;
use crate::response::{NewsDigest, UserProfile};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Recent news for a player
#[utoipa::path(
    get,
    path = "/get_nfl_news",
    tag = "News",
    params(NewsQuery),
    responses(
        (status = 200, description = "News digest, or a no-news message", body = ChatReply),
        (status = 400, description = "No player given", body = ErrorResponse),
        (status = 500, description = "News provider failure", body = ErrorResponse),
    )
)]
pub async fn get_nfl_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<ChatReply>, AppError> {
    let player = required(query.player, "No player name provided")?;
    news_reply(&state, &player).await
}

/// Fantasy platform user profile
#[utoipa::path(
    get,
    path = "/get_user",
    tag = "Fantasy",
    params(UserQuery),
    responses(
        (status = 200, description = "Projected user profile", body = UserProfile),
        (status = 400, description = "No username given", body = ErrorResponse),
        (status = 500, description = "Platform failure", body = ErrorResponse),
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserProfile>, AppError> {
    let username = required(query.username, "No username provided")?;
    user_reply(&state, &username).await
}

/// Fantasy league details, passed through unchanged
#[utoipa::path(
    get,
    path = "/get_league",
    tag = "Fantasy",
    params(LeagueQuery),
    responses(
        (status = 200, description = "Upstream league record"),
        (status = 400, description = "No league ID given", body = ErrorResponse),
        (status = 500, description = "Platform failure", body = ErrorResponse),
    )
)]
pub async fn get_league(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeagueQuery>,
) -> Result<Json<Value>, AppError> {
    let league_id = required(query.league_id, "No league ID provided")?;
    league_reply(&state, &league_id).await
}

/// Rosters of a fantasy league, passed through unchanged
#[utoipa::path(
    get,
    path = "/get_roster",
    tag = "Fantasy",
    params(LeagueQuery),
    responses(
        (status = 200, description = "Upstream roster list"),
        (status = 400, description = "No league ID given", body = ErrorResponse),
        (status = 500, description = "Platform failure", body = ErrorResponse),
    )
)]
pub async fn get_roster(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeagueQuery>,
) -> Result<Json<Value>, AppError> {
    let league_id = required(query.league_id, "No league ID provided")?;
    info!(league_id = %league_id, "Fetching league rosters");

    let rosters = state.fantasy.rosters(&league_id).await?;
    Ok(Json(rosters))
}

/// Route a free-text message to news, user, league or general chat
#[utoipa::path(
    get,
    path = "/chatbot",
    tag = "Chat",
    params(ChatbotQuery),
    responses(
        (status = 200, description = "Body of the selected handler"),
        (status = 400, description = "No message, or a news request without a player", body = ErrorResponse),
        (status = 500, description = "Provider failure", body = ErrorResponse),
    )
)]
pub async fn chatbot(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChatbotQuery>,
) -> Result<Response, AppError> {
    let message = required(query.message, "No message provided")?;
    let intent = Intent::classify(&message);
    info!(intent = intent.kind(), "Routing chatbot message");

    let response = match intent {
        Intent::News(player) => {
            if player.is_empty() {
                return Err(AppError::MissingParameter(
                    "Player name not provided".to_string(),
                ));
            }
            news_reply(&state, &player).await?.into_response()
        }
        // No emptiness guard for user and league arguments
        Intent::User(username) => user_reply(&state, &username).await?.into_response(),
        Intent::League(league_id) => league_reply(&state, &league_id).await?.into_response(),
        Intent::Chat(message) => chat_reply(&state, &message).await?.into_response(),
    };

    Ok(response)
}

async fn chat_reply(state: &AppState, message: &str) -> Result<Json<ChatReply>, AppError> {
    info!(message_len = message.len(), "Forwarding message to completion service");

    let reply = state.completions.complete(message).await?;
    Ok(Json(ChatReply { response: reply }))
}

async fn news_reply(state: &AppState, player: &str) -> Result<Json<ChatReply>, AppError> {
    info!(player = %player, "Fetching news");

    let articles = state.news.search(player).await?;
    let digest = NewsDigest::new(player, articles);
    Ok(Json(ChatReply::new(digest.render()?)))
}

async fn user_reply(state: &AppState, username: &str) -> Result<Json<UserProfile>, AppError> {
    info!(username = %username, "Fetching user details");

    let record = state.fantasy.user(username).await?;
    Ok(Json(UserProfile::from_record(&record)?))
}

async fn league_reply(state: &AppState, league_id: &str) -> Result<Json<Value>, AppError> {
    info!(league_id = %league_id, "Fetching league details");

    let league = state.fantasy.league(league_id).await?;
    Ok(Json(league))
}

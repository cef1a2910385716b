//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::*;
use crate::response::UserProfile;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fantasy Chat Gateway API",
        description = "Keyword-routed chat over completion, news and fantasy-football providers.",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        handlers::health_check,
        handlers::get_nfl_news,
        handlers::get_user,
        handlers::get_league,
        handlers::get_roster,
        handlers::chatbot,
    ),
    components(schemas(
        ChatReply,
        ErrorResponse,
        HealthResponse,
        UserProfile,
    )),
    tags(
        (name = "Chat", description = "Intent-routed chat endpoint"),
        (name = "News", description = "Player news endpoints"),
        (name = "Fantasy", description = "Fantasy league platform lookups"),
        (name = "Health", description = "Health and monitoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    Router::new()
        // Landing page
        .route("/", get(handlers::index))
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // Direct handler endpoints
        .route("/get_nfl_news", get(handlers::get_nfl_news))
        .route("/get_user", get(handlers::get_user))
        .route("/get_league", get(handlers::get_league))
        .route("/get_roster", get(handlers::get_roster))
        // Intent-routed entry point
        .route("/chatbot", get(handlers::chatbot))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add shared state
        .with_state(state)
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}

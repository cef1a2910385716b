//! Provider traits the handlers depend on

use async_trait::async_trait;
use serde_json::Value;

use crate::backend::news::NewsArticle;
use crate::error::Result;

/// Conversational completion provider
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send `message` as a single user turn and return the first choice's text
    async fn complete(&self, message: &str) -> Result<Option<String>>;
}

/// News search provider
#[async_trait]
pub trait NewsBackend: Send + Sync {
    /// Articles matching `query`, in whatever order the provider returns them
    async fn search(&self, query: &str) -> Result<Vec<NewsArticle>>;
}

/// Fantasy league platform REST API.
///
/// Bodies are returned as raw JSON; callers decide whether to project or pass through.
#[async_trait]
pub trait FantasyBackend: Send + Sync {
    async fn user(&self, username: &str) -> Result<Value>;

    async fn league(&self, league_id: &str) -> Result<Value>;

    async fn rosters(&self, league_id: &str) -> Result<Value>;
}

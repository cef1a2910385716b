//! Fantasy league platform client (Sleeper public REST API)

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::backend::traits::FantasyBackend;
use crate::config::FantasyConfig;
use crate::error::{AppError, Result};

/// Unauthenticated client for the league platform's read endpoints
pub struct SleeperClient {
    client: Client,
    base_url: Url,
}

impl SleeperClient {
    pub fn new(config: &FantasyConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::Internal(format!("Invalid fantasy base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Internal(format!(
                "Fantasy base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Append `segments` to the base path, each one percent-encoded as a
    /// single segment so `/`, `?` and `#` in an argument stay inside it.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Internal(format!("Fantasy base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url`; non-2xx statuses and undecodable bodies surface as `AppError::HttpClient`
    async fn get_json(&self, url: Url) -> Result<Value> {
        debug!(url = %url, "Requesting data from fantasy platform");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(body)
    }
}

#[async_trait]
impl FantasyBackend for SleeperClient {
    async fn user(&self, username: &str) -> Result<Value> {
        self.get_json(self.endpoint(&["user", username])?).await
    }

    async fn league(&self, league_id: &str) -> Result<Value> {
        self.get_json(self.endpoint(&["league", league_id])?).await
    }

    async fn rosters(&self, league_id: &str) -> Result<Value> {
        self.get_json(self.endpoint(&["league", league_id, "rosters"])?)
            .await
    }
}

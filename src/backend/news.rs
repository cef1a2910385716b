//! News search client for NewsAPI compatible endpoints

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend::traits::NewsBackend;
use crate::config::NewsConfig;
use crate::error::{AppError, Result};

/// A single article as reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsArticle {
    #[serde(default)]
    pub title: Option<String>,
    /// ISO-8601, expected as `YYYY-MM-DDTHH:MM:SSZ`
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    status: String,
    #[serde(default)]
    articles: Option<Vec<NewsArticle>>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// NewsAPI `everything` search client
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    language: String,
    sort_by: String,
    api_key_env: String,
    api_key: Option<String>,
}

impl NewsApiClient {
    pub fn new(config: &NewsConfig, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            sort_by: config.sort_by.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl NewsBackend for NewsApiClient {
    async fn search(&self, query: &str) -> Result<Vec<NewsArticle>> {
        let token = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::MissingCredential(self.api_key_env.clone()))?;

        let url = format!("{}/everything", self.base_url);
        debug!(url = %url, query = %query, "Searching news");

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", token)
            .query(&[
                ("q", query),
                ("language", self.language.as_str()),
                ("sortBy", self.sort_by.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Error responses carry the same envelope with status "error"
        let envelope: NewsEnvelope = serde_json::from_str(&body).map_err(|e| {
            AppError::Upstream(format!(
                "News service returned {} with an unreadable body: {}",
                status, e
            ))
        })?;

        if envelope.status != "ok" {
            return Err(AppError::Upstream(format!(
                "{}: {}",
                envelope.code.as_deref().unwrap_or("error"),
                envelope.message.as_deref().unwrap_or("news service reported an error"),
            )));
        }

        let articles = envelope.articles.unwrap_or_default();
        debug!(count = articles.len(), "News search completed");
        Ok(articles)
    }
}

//! Fantasy Chat Gateway
//!
//! A small HTTP backend that routes free-text questions to a chat completion
//! provider, a news search provider or a fantasy league platform, chosen by
//! keyword matching, and answers with JSON.

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod intent;
pub mod response;

pub use error::{AppError, Result};

use std::sync::Arc;

use crate::backend::{
    CompletionBackend, FantasyBackend, NewsApiClient, NewsBackend, OpenAICompletionClient,
    SleeperClient,
};
use crate::config::{Credentials, Settings};

/// Application state shared across all handlers.
///
/// Holds one configured client per provider; nothing in here is mutated
/// after startup.
pub struct AppState {
    pub completions: Arc<dyn CompletionBackend>,
    pub news: Arc<dyn NewsBackend>,
    pub fantasy: Arc<dyn FantasyBackend>,
}

impl AppState {
    /// Build the provider clients from configuration and startup credentials
    pub fn from_settings(settings: &Settings, credentials: Credentials) -> Result<Self> {
        let completions =
            OpenAICompletionClient::new(&settings.completion, credentials.completion_api_key)?;
        let news = NewsApiClient::new(&settings.news, credentials.news_api_key)?;
        let fantasy = SleeperClient::new(&settings.fantasy)?;

        Ok(Self {
            completions: Arc::new(completions),
            news: Arc::new(news),
            fantasy: Arc::new(fantasy),
        })
    }
}

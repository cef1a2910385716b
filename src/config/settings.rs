//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `FANTASY_GATEWAY__SERVER__PORT`
pub const ENV_PREFIX: &str = "FANTASY_GATEWAY";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub fantasy: FantasyConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `json` or `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Chat completion provider (OpenAI compatible)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompletionConfig {
    #[serde(default = "default_completion_url")]
    pub base_url: String,
    #[serde(default = "default_completion_model")]
    pub model: String,
    /// Name of the environment variable holding the API key
    #[serde(default = "default_completion_key_env")]
    pub api_key_env: String,
}

fn default_completion_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_completion_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_completion_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_completion_url(),
            model: default_completion_model(),
            api_key_env: default_completion_key_env(),
        }
    }
}

/// News search provider (NewsAPI compatible)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsConfig {
    #[serde(default = "default_news_url")]
    pub base_url: String,
    #[serde(default = "default_news_language")]
    pub language: String,
    #[serde(default = "default_news_sort")]
    pub sort_by: String,
    #[serde(default = "default_news_key_env")]
    pub api_key_env: String,
}

fn default_news_url() -> String {
    "https://newsapi.org/v2".to_string()
}

fn default_news_language() -> String {
    "en".to_string()
}

fn default_news_sort() -> String {
    "publishedAt".to_string()
}

fn default_news_key_env() -> String {
    "NEWS_API_KEY".to_string()
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: default_news_url(),
            language: default_news_language(),
            sort_by: default_news_sort(),
            api_key_env: default_news_key_env(),
        }
    }
}

/// Fantasy league platform (Sleeper public API)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FantasyConfig {
    #[serde(default = "default_fantasy_url")]
    pub base_url: String,
}

fn default_fantasy_url() -> String {
    "https://api.sleeper.app/v1".to_string()
}

impl Default for FantasyConfig {
    fn default() -> Self {
        Self {
            base_url: default_fantasy_url(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/gateway.yaml")
    }

    /// Load settings from a specific configuration file path.
    ///
    /// The file is optional; YAML is assumed for `.yaml`/`.yml`, TOML otherwise.
    /// Environment variables under [`ENV_PREFIX`] override file values.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let format = if path.extension().map_or(false, |ext| ext == "yaml" || ext == "yml") {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let mut config_builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        if path.exists() {
            config_builder = config_builder.add_source(File::from(path).format(format));
        }

        config_builder = config_builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config = config_builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        let urls = [
            ("completion", &self.completion.base_url),
            ("news", &self.news.base_url),
            ("fantasy", &self.fantasy.base_url),
        ];
        for (provider, url) in urls {
            if let Err(e) = reqwest::Url::parse(url) {
                return Err(AppError::Config(config::ConfigError::Message(format!(
                    "Invalid {} base_url '{}': {}",
                    provider, url, e
                ))));
            }
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            completion: CompletionConfig::default(),
            news: NewsConfig::default(),
            fantasy: FantasyConfig::default(),
        }
    }
}

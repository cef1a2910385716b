//! Configuration module - settings and credentials

pub mod credentials;
pub mod settings;

pub use credentials::Credentials;
pub use settings::{
    CompletionConfig, FantasyConfig, LoggingConfig, NewsConfig, ServerConfig, Settings,
    ENV_PREFIX,
};

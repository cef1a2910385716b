//! Backend module - provider traits and HTTP clients

pub mod completion;
pub mod fantasy;
pub mod news;
pub mod traits;

pub use completion::{ChatMessage, OpenAICompletionClient};
pub use fantasy::SleeperClient;
pub use news::{NewsApiClient, NewsArticle};
pub use traits::{CompletionBackend, FantasyBackend, NewsBackend};

//! Plain-text news digest built from provider articles

use chrono::NaiveDateTime;
use tracing::debug;

use crate::backend::NewsArticle;
use crate::error::{AppError, Result};

/// Timestamp layout the provider is expected to use
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Long date layout used in the digest, e.g. `March 05, 2024`
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

/// Number of headline articles recorded in the debug log
pub const HEADLINE_COUNT: usize = 3;

/// Articles for one query, newest first
#[derive(Debug, Clone)]
pub struct NewsDigest {
    subject: String,
    articles: Vec<NewsArticle>,
}

impl NewsDigest {
    /// Re-sort `articles` by `publishedAt` descending.
    ///
    /// The sort is stable and compares the raw timestamp strings, so articles
    /// sharing a timestamp keep provider order.
    pub fn new(subject: impl Into<String>, mut articles: Vec<NewsArticle>) -> Self {
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Self {
            subject: subject.into(),
            articles,
        }
    }

    fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// The `n` most recent articles
    pub fn headlines(&self, n: usize) -> &[NewsArticle] {
        &self.articles[..n.min(self.articles.len())]
    }

    /// Render every article, not only the headlines.
    ///
    /// An empty digest renders the "no relevant news" message.
    pub fn render(&self) -> Result<String> {
        if self.is_empty() {
            return Ok(format!("No relevant news found for {}.", self.subject));
        }

        debug!(
            subject = %self.subject,
            headlines = ?self
                .headlines(HEADLINE_COUNT)
                .iter()
                .map(|a| a.title.as_deref().unwrap_or_default())
                .collect::<Vec<_>>(),
            total = self.articles.len(),
            "Rendering news digest"
        );

        let mut out = format!("Recent news about {}:\n\n", self.subject);
        for article in &self.articles {
            let published = format_published_at(article.published_at.as_deref())?;
            out.push_str(&format!(
                "• {}\n  Published on {}\n  Read more: {}\n\n",
                article.title.as_deref().unwrap_or_default(),
                published,
                article.url.as_deref().unwrap_or_default(),
            ));
        }

        Ok(out)
    }
}

/// Reformat a strict `YYYY-MM-DDTHH:MM:SSZ` timestamp as a long date
pub fn format_published_at(value: Option<&str>) -> Result<String> {
    let value = value
        .ok_or_else(|| AppError::InvalidArticle("article is missing publishedAt".to_string()))?;

    let parsed = NaiveDateTime::parse_from_str(value, PUBLISHED_AT_FORMAT).map_err(|source| {
        AppError::InvalidTimestamp {
            value: value.to_string(),
            source,
        }
    })?;

    Ok(parsed.format(DISPLAY_DATE_FORMAT).to_string())
}

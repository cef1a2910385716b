//! Keyword intent routing for free-text chat messages
//!
//! Matching is a first-match, ASCII case-insensitive substring test in a
//! fixed order. The argument for a keyword intent is whatever follows the
//! last occurrence of the keyword, trimmed, with its original casing.
//! "user" matches inside unrelated words such as "username" or "abuser";
//! callers depend on that, so there is no word-boundary check.

const NEWS_KEYWORD: &str = "news about";
const USER_KEYWORD: &str = "user";
const LEAGUE_KEYWORD: &str = "league";

/// Handler selected for a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Player or topic name; may be empty
    News(String),
    /// Username; may be empty
    User(String),
    /// League identifier; may be empty
    League(String),
    /// Full original message
    Chat(String),
}

impl Intent {
    pub fn classify(message: &str) -> Self {
        if let Some(rest) = after_last(message, NEWS_KEYWORD) {
            Intent::News(rest.trim().to_string())
        } else if let Some(rest) = after_last(message, USER_KEYWORD) {
            Intent::User(rest.trim().to_string())
        } else if let Some(rest) = after_last(message, LEAGUE_KEYWORD) {
            Intent::League(rest.trim().to_string())
        } else {
            Intent::Chat(message.to_string())
        }
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::News(_) => "news",
            Intent::User(_) => "user",
            Intent::League(_) => "league",
            Intent::Chat(_) => "chat",
        }
    }
}

/// Text after the last ASCII case-insensitive occurrence of `needle`.
///
/// `needle` must be ASCII so every match offset is a char boundary.
fn after_last<'a>(haystack: &'a str, needle: &str) -> Option<&'a str> {
    debug_assert!(needle.is_ascii());

    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - pat.len())
        .rev()
        .find(|&start| hay[start..start + pat.len()].eq_ignore_ascii_case(pat))
        .map(|start| &haystack[start + pat.len()..])
}

//! Provider API keys, read once from the process environment

use std::fmt;

use crate::config::Settings;

/// API keys for the completion and news providers.
///
/// Absent variables are kept as `None`; the owning client reports the
/// missing key the first time it is asked to make a call.
#[derive(Clone, Default)]
pub struct Credentials {
    pub completion_api_key: Option<String>,
    pub news_api_key: Option<String>,
}

impl Credentials {
    /// Read keys from the variables named in `settings`
    pub fn from_env(settings: &Settings) -> Self {
        Self::from_lookup(settings, |name| std::env::var(name).ok())
    }

    /// Read keys through an arbitrary lookup, mainly for tests
    pub fn from_lookup<F>(settings: &Settings, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            completion_api_key: lookup(&settings.completion.api_key_env),
            news_api_key: lookup(&settings.news.api_key_env),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(key: &Option<String>) -> &'static str {
            if key.is_some() {
                "<redacted>"
            } else {
                "<unset>"
            }
        }

        f.debug_struct("Credentials")
            .field("completion_api_key", &redact(&self.completion_api_key))
            .field("news_api_key", &redact(&self.news_api_key))
            .finish()
    }
}

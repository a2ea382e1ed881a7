use std::str::FromStr;
use std::time::Duration;

use crate::update_loop::RetryPolicy;

/// Query-string keys the page understands.
pub const SERVER_PARAM: &str = "server";
pub const RETRIES_PARAM: &str = "retries";
pub const BACKOFF_PARAM: &str = "backoff_ms";
pub const MAX_BACKOFF_PARAM: &str = "max_backoff_ms";

/// Client settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Base URL of the simulation server. `None` means the page's own origin.
    pub server_url: Option<String>,
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Build a config from a key lookup (the page's query string in the browser).
    /// Values that fail to parse keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RetryPolicy::default();
        let server_url = lookup(SERVER_PARAM)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let retry = RetryPolicy {
            max_attempts: parse_or(&lookup, RETRIES_PARAM, defaults.max_attempts),
            initial_backoff: Duration::from_millis(parse_or(
                &lookup,
                BACKOFF_PARAM,
                defaults.initial_backoff.as_millis() as u64,
            )),
            max_backoff: Duration::from_millis(parse_or(
                &lookup,
                MAX_BACKOFF_PARAM,
                defaults.max_backoff.as_millis() as u64,
            )),
        };

        Self { server_url, retry }
    }

    /// Base URL requests go to, falling back to `origin`.
    pub fn base_url(&self, origin: &str) -> String {
        self.server_url
            .clone()
            .unwrap_or_else(|| origin.trim_end_matches('/').to_string())
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "ignoring invalid config value");
            default
        }),
    }
}

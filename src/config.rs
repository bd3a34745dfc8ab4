use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.apilayer.com/spoonacular";

/// Upper bound on retries, whatever the environment asks for.
pub const MAX_RETRIES: u32 = 5;
/// Upper bound on a single backoff sleep.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

impl ClientSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Unparseable values fall back to the defaults rather than failing the run.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("SPOONACULAR_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);

        let timeout = lookup("SPOONACULAR_TIMEOUT_SECS")
            .and_then(|t| t.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let max_retries = lookup("SPOONACULAR_MAX_RETRIES")
            .and_then(|r| r.trim().parse::<u32>().ok())
            .map(|r| r.min(MAX_RETRIES))
            .unwrap_or(defaults.max_retries);

        Self {
            base_url,
            timeout,
            max_retries,
            retry_backoff: defaults.retry_backoff,
        }
    }
}

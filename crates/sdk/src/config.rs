//! Configuration types for the Runn SDK.

use crate::error::{RunnError, RunnResult};
use std::time::Duration;
use url::Url;

/// Production Runn API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.runn.io";

/// Upstream API version, sent as the `accept-version` header.
pub const API_VERSION: &str = "1.0.0";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PAGE_SIZE: u32 = 200;
const DEFAULT_PAGE_LIMIT: u32 = 500;

/// Immutable client configuration, established once at startup and shared
/// by every invocation.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream API.
    pub base_url: Url,
    /// API key, sent as a bearer token.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry configuration.
    pub retry: RetryConfig,
    /// Records requested per page (the upstream `limit` parameter).
    pub page_size: u32,
    /// Safety bound on pages fetched per list aggregation.
    pub page_limit: u32,
}

impl ClientConfig {
    /// Create a configuration with default timeouts and pagination bounds.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url: ensure_trailing_slash(base_url),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryConfig::default(),
            page_size: DEFAULT_PAGE_SIZE,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Read configuration from the environment. `RUNN_API_KEY` is
    /// required; `RUNN_API_URL`, `RUNN_TIMEOUT_SECS`, `RUNN_MAX_RETRIES`,
    /// and `RUNN_PAGE_LIMIT` override the defaults.
    pub fn from_env() -> RunnResult<Self> {
        let api_key = std::env::var("RUNN_API_KEY")
            .map_err(|_| RunnError::Config("RUNN_API_KEY is not set".to_string()))?;
        let base_url = match std::env::var("RUNN_API_URL") {
            Ok(raw) => Url::parse(&raw)?,
            Err(_) => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut config = Self::new(base_url, api_key);
        if let Some(secs) = env_number::<u64>("RUNN_TIMEOUT_SECS")? {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = env_number::<u32>("RUNN_MAX_RETRIES")? {
            config.retry = RetryConfig::uniform(retries);
        }
        if let Some(limit) = env_number::<u32>("RUNN_PAGE_LIMIT")? {
            config.page_limit = limit;
        }
        Ok(config)
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the retry policy.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Override the pagination safety bound.
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }
}

// Url::join treats the last path segment of a slashless base as
// replaceable; a trailing slash keeps relative joins under the base.
fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn env_number<T: std::str::FromStr>(name: &str) -> RunnResult<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| RunnError::Config(format!("{name} is not a valid number: {raw}"))),
        Err(_) => Ok(None),
    }
}

/// The single uniform retry policy applied to upstream requests.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries.
    pub max_retries: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
    /// HTTP status codes to retry on.
    pub retry_on_status_codes: Vec<u16>,
}

impl Default for RetryConfig {
    /// No retries: a transient failure surfaces immediately, and the
    /// caller decides whether to repeat the whole invocation.
    fn default() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(10),
            backoff_multiplier: 2.0,
            retry_on_status_codes: vec![429, 500, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// The uniform policy with the given retry budget.
    pub fn uniform(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Calculate backoff duration for a given attempt.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let backoff_ms = self.initial_backoff.as_millis() as f64
            * self.backoff_multiplier.powi(attempt as i32);
        let backoff = Duration::from_millis(backoff_ms as u64);
        std::cmp::min(backoff, self.max_backoff)
    }

    /// Check if a status code should trigger a retry.
    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_on_status_codes.contains(&status)
    }
}

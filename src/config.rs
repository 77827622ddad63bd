//! Client configuration.
//!
//! The base URL is resolved once at startup: from the
//! `CODECAMPASS_API_URL` environment variable (a `.env` file is honored)
//! or a development default. Timeouts are plain fields so embedders and
//! tests can shrink them.

use std::time::Duration;

/// Environment variable naming the API base address
const ENV_BASE_URL: &str = "CODECAMPASS_API_URL";

/// Development default; production deployments sit behind a proxy and
/// set the variable explicitly.
const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Default request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Timeout for the repository-import request in seconds.
/// Cloning and embedding a large repository can take many minutes.
const IMPORT_TIMEOUT_SECS: u64 = 15 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub request_timeout: Duration,
    pub import_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            import_timeout: Duration::from_secs(IMPORT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Resolve configuration from the environment, loading `.env` if
    /// present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let base_url = std::env::var(ENV_BASE_URL)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

//! Upstream catalog API configuration

use serde::{Deserialize, Serialize};

use super::parse_or;

/// Default location of the upstream catalog API
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Where requests are forwarded and how long to wait for them
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL without trailing slash
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    /// Create a configuration pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Default::default()
        }
    }

    /// Read `UPSTREAM_BASE_URL` and `UPSTREAM_TIMEOUT_SECS`
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("UPSTREAM_BASE_URL")
            .map(|url| normalize_base_url(&url))
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            timeout_secs: parse_or(lookup, "UPSTREAM_TIMEOUT_SECS", default_timeout_secs()),
        }
    }

    /// Join a path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

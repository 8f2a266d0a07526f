//! Application configuration domain model

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://notehub-public.goit.study/api/notes";

/// Application configuration
///
/// Every field has a default so a partial TOML file (or none at all) still
/// yields a usable config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base endpoint of the notes collection
    pub api_base_url: String,

    /// Bearer token; `None` sends no Authorization header
    pub token: Option<String>,

    /// Page size used for every list request
    pub per_page: u32,

    /// Search input debounce interval
    pub debounce_ms: u64,

    /// How long a cached page counts as fresh
    pub stale_time_ms: u64,

    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Sets the token, treating an empty or blank string as absent.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            per_page: 12,
            debounce_ms: 500,
            stale_time_ms: 30_000,
            request_timeout_secs: 30,
        }
    }
}

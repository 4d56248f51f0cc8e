//! Startup configuration.
//!
//! The base URL is read once from the environment; the earliest page
//! iteration hardcoded it instead, so a missing variable falls back to
//! that historical default rather than failing.

use std::env;

/// Environment variable naming the API base URL.
pub const BASE_URL_VAR: &str = "TODO_API_URL";

/// Default used when the variable is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Read configuration from the process environment, once, at startup.
    pub fn from_env() -> Self {
        let base_url =
            env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Config { base_url }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
        }
    }
}

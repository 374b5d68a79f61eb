//! API configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle runs in the browser, so there is no process environment to read
//! at startup. The API base URL is baked in from `AUTH_API_BASE_URL` when the
//! crate is compiled and falls back to a same-origin `/api` prefix.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Remote authentication API settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `AUTH_API_BASE_URL`: default `/api`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self { base_url: parse_base_url(option_env!("AUTH_API_BASE_URL")) }
    }

    /// Absolute or origin-relative URL for an API path such as `/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.trim_end_matches('/').is_empty() => value.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}

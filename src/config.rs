//! Build-time client configuration.
//!
//! The WASM bundle cannot read the host environment at runtime, so values are
//! captured when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the auth service; empty means same origin.
const API_BASE_ENV: Option<&str> = option_env!("DIGIVENT_API_BASE");

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    /// Configuration captured from `DIGIVENT_API_BASE` at build time.
    pub fn from_build_env() -> Self {
        Self::with_api_base(API_BASE_ENV.unwrap_or_default())
    }

    pub fn with_api_base(api_base: &str) -> Self {
        Self { api_base: api_base.trim().trim_end_matches('/').to_owned() }
    }

    /// Absolute or same-origin URL for an API path such as `/api/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

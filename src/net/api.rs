//! REST API helpers for communicating with the auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/[`AuthError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! An explicit rejection from the service comes back as
//! `Ok(AuthOutcome { success: false, .. })`. Anything that prevents reading
//! such an answer (network failure, unexpected status, bad body) is an
//! [`AuthError`], which the form downgrades to a generic banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthOutcome, LoginRequest, RegisterRequest, SessionUser};
use crate::config::ClientConfig;
use crate::state::auth::Profile;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";
pub const PROFILE_ENDPOINT: &str = "/api/profile";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),
    #[error("auth service responded with status {0}")]
    Status(u16),
    #[error("malformed auth service response: {0}")]
    Decode(String),
    #[error("{0}")]
    Unavailable(String),
}

/// Credential verification and account creation.
///
/// Implementations run on the single-threaded UI loop, so the returned
/// futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    /// Verify credentials and start a session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when no answer could be obtained from the service.
    async fn login(&self, request: &LoginRequest) -> Result<AuthOutcome, AuthError>;

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when no answer could be obtained from the service.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthOutcome, AuthError>;
}

/// [`AuthService`] backed by the service's HTTP endpoints.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthService {
    config: ClientConfig,
}

impl HttpAuthService {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl AuthService for HttpAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<AuthOutcome, AuthError> {
        post_auth(&self.config.endpoint(LOGIN_ENDPOINT), request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthOutcome, AuthError> {
        post_auth(&self.config.endpoint(REGISTER_ENDPOINT), request).await
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_response(status: u16, body: &str) -> Result<AuthOutcome, AuthError> {
    // Rejections usually arrive as 4xx with an outcome body; prefer the body.
    match serde_json::from_str::<AuthOutcome>(body) {
        Ok(outcome) => Ok(outcome),
        Err(_) if !(200..300).contains(&status) => Err(AuthError::Status(status)),
        Err(e) => Err(AuthError::Decode(e.to_string())),
    }
}

async fn post_auth<T: serde::Serialize>(url: &str, payload: &T) -> Result<AuthOutcome, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        classify_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload);
        Err(AuthError::Unavailable("not available on server".to_owned()))
    }
}

/// Fetch the currently authenticated account from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user(config: &ClientConfig) -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint(CURRENT_USER_ENDPOINT))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// Fetch the signed-in account's profile from `/api/profile`.
///
/// # Errors
///
/// Returns an [`AuthError`] if the request fails or the body is not a profile.
pub async fn fetch_profile(config: &ClientConfig) -> Result<Profile, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint(PROFILE_ENDPOINT))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::Status(resp.status()));
        }
        resp.json::<Profile>().await.map_err(|e| AuthError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(AuthError::Unavailable("not available on server".to_owned()))
    }
}

//! Session lookup for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs on startup and after a successful sign-in. Authentication and profile
//! are resolved in two steps, so guards briefly see an authenticated session
//! without a profile and show the profile placeholder.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::{AuthError, fetch_current_user, fetch_profile};
use crate::net::types::SessionUser;
use crate::state::auth::{AuthState, Profile};

/// Session state once the current-user lookup has answered.
pub fn after_user_lookup(user: Option<&SessionUser>) -> AuthState {
    AuthState { is_authenticated: user.is_some(), is_loading: false, profile: None }
}

/// Attach a profile lookup result to an authenticated session.
///
/// A failed lookup leaves the profile unset; the guard keeps showing its
/// profile placeholder rather than inventing a role.
pub fn after_profile_lookup(mut state: AuthState, profile: Result<Profile, AuthError>) -> AuthState {
    match profile {
        Ok(profile) if state.is_authenticated => state.profile = Some(profile),
        Ok(_) => {}
        Err(e) => leptos::logging::warn!("profile lookup failed: {e}"),
    }
    state
}

/// Resolve the current session and write it into `auth`.
pub async fn load_session(auth: RwSignal<AuthState>, config: ClientConfig) {
    auth.update(|s| s.is_loading = true);
    let user = fetch_current_user(&config).await;
    let state = after_user_lookup(user.as_ref());
    let authenticated = state.is_authenticated;
    auth.set(state);
    if !authenticated {
        return;
    }
    let profile = fetch_profile(&config).await;
    auth.update(|s| *s = after_profile_lookup(s.clone(), profile));
}

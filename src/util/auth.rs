//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! After a successful sign-in the session loader fills in the profile; the
//! auth page then leaves for the carried `from` location or the role's home.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::access::safe_return_path;

/// Where a signed-in user should land, once their profile is known.
pub fn post_login_target(state: &AuthState, from: Option<&str>) -> Option<String> {
    if state.is_loading || !state.is_authenticated {
        return None;
    }
    let role = state.role()?;
    Some(safe_return_path(from).unwrap_or_else(|| role.home_path().to_owned()))
}

/// Leave the auth page whenever the session resolves to a signed-in profile.
pub fn install_post_login_redirect<F>(auth: RwSignal<AuthState>, from: Signal<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let from = from.get();
        let target = auth.with(|state| post_login_target(state, from.as_deref()));
        if let Some(target) = target {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

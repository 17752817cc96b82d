//! Route access decisions for guarded views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` calls [`decide`] on every session or location change. The
//! decision is a pure function of the session snapshot, the route's required
//! role, and the requested location, so it is safe to re-evaluate freely.
//!
//! ROLE POLICY
//! ===========
//! Access to role-gated routes is a lookup in [`allowed_roles`], not a rank
//! comparison. Admins satisfy organizer gates but not volunteer gates.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::state::auth::{AuthState, Role};

pub const LOGIN_PATH: &str = "/login";
pub const FORBIDDEN_PATH: &str = "/403";
pub const VOLUNTEER_DASHBOARD_PATH: &str = "/dashboard/volunteer";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

const ADMIN_PREFIX: &str = "/admin";

/// Query parameter carrying the originally requested location to `/login`.
pub const RETURN_PARAM: &str = "from";

/// Location the visitor asked for, as reported by the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestedLocation<'a> {
    pub path: &'a str,
    /// Raw query string, with or without the leading `?`.
    pub search: &'a str,
}

impl<'a> RequestedLocation<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path, search: "" }
    }

    /// Path plus query string, suitable for navigating back later.
    pub fn href(&self) -> String {
        let search = self.search.trim_start_matches('?');
        if search.is_empty() {
            self.path.to_owned()
        } else {
            format!("{}?{search}", self.path)
        }
    }
}

/// Which placeholder to show while the guard waits on the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingKind {
    Session,
    Profile,
}

impl LoadingKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::Session => "Loading...",
            Self::Profile => "Loading profile...",
        }
    }
}

/// Outcome of evaluating a guarded route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Loading(LoadingKind),
    /// Replace the current history entry with this path.
    Redirect(String),
}

/// Roles that may enter a route gated on `required`.
pub fn allowed_roles(required: Role) -> &'static [Role] {
    match required {
        Role::Admin => &[Role::Admin],
        Role::Organizer => &[Role::Admin, Role::Organizer],
        Role::Volunteer => &[Role::Volunteer],
    }
}

/// Decide whether the current visitor may render a guarded view.
///
/// Rules are evaluated in order and the first match wins:
/// loading session, unauthenticated, missing profile, role gate, then
/// home-route steering for role-agnostic routes.
pub fn decide(
    session: &AuthState,
    required: Option<Role>,
    location: &RequestedLocation<'_>,
) -> GuardDecision {
    if session.is_loading {
        return GuardDecision::Loading(LoadingKind::Session);
    }
    if !session.is_authenticated {
        return GuardDecision::Redirect(login_redirect_path(&location.href()));
    }
    let Some(role) = session.role() else {
        return GuardDecision::Loading(LoadingKind::Profile);
    };

    match required {
        Some(required) => {
            if allowed_roles(required).contains(&role) {
                GuardDecision::Render
            } else {
                GuardDecision::Redirect(FORBIDDEN_PATH.to_owned())
            }
        }
        None => match steer_home(role, location.path) {
            Some(target) => GuardDecision::Redirect(target.to_owned()),
            None => GuardDecision::Render,
        },
    }
}

/// Keep role-agnostic routes from landing a user in the other role's area.
fn steer_home(role: Role, path: &str) -> Option<&'static str> {
    match role {
        Role::Volunteer if path.starts_with(ADMIN_PREFIX) => Some(VOLUNTEER_DASHBOARD_PATH),
        Role::Admin | Role::Organizer if path.starts_with(VOLUNTEER_DASHBOARD_PATH) => {
            Some(ADMIN_DASHBOARD_PATH)
        }
        _ => None,
    }
}

/// `/login` with the requested location carried in the `from` parameter.
pub fn login_redirect_path(from: &str) -> String {
    if from.is_empty() {
        return LOGIN_PATH.to_owned();
    }
    format!("{LOGIN_PATH}?{RETURN_PARAM}={}", urlencoding::encode(from))
}

/// Accept a carried return location only if it stays on this site.
///
/// Rejects absolute and protocol-relative URLs, and the login page itself.
/// Control characters are refused outright: URL parsers drop tabs and
/// newlines, so `"/\t/host"` would otherwise resolve as `//host`.
pub fn safe_return_path(from: Option<&str>) -> Option<String> {
    let from = from?.trim();
    if from.chars().any(char::is_control) {
        return None;
    }
    if !from.starts_with('/') || from.starts_with("//") || from.starts_with("/\\") {
        return None;
    }
    let path = from.split(['?', '#']).next().unwrap_or_default();
    if path == LOGIN_PATH || path.starts_with("/login/") {
        return None;
    }
    Some(from.to_owned())
}

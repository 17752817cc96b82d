//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the auth page to coordinate login redirects and
//! role-dependent rendering. The session is written only by the session
//! loader; guards read it as a snapshot.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::util::access::{ADMIN_DASHBOARD_PATH, VOLUNTEER_DASHBOARD_PATH};

/// Platform role assigned to an account at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Organizer,
    Volunteer,
}

impl Role {
    /// Roles in the order the registration picker lists them.
    pub const ALL: [Role; 3] = [Role::Volunteer, Role::Organizer, Role::Admin];

    /// Parse the wire/form name of a role (`"admin"`, `"organizer"`, `"volunteer"`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "organizer" => Some(Self::Organizer),
            "volunteer" => Some(Self::Volunteer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Organizer => "organizer",
            Self::Volunteer => "volunteer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Organizer => "Event Organizer",
            Self::Volunteer => "Volunteer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Admin => "Full platform access and management",
            Self::Organizer => "Create and manage events",
            Self::Volunteer => "Help organize and support events",
        }
    }

    /// Landing route for this role after sign-in.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin | Self::Organizer => ADMIN_DASHBOARD_PATH,
            Self::Volunteer => VOLUNTEER_DASHBOARD_PATH,
        }
    }
}

/// Persisted profile fetched after authentication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Session snapshot tracking authentication, profile, and loading status.
///
/// `profile` stays `None` after authentication until the profile lookup
/// completes, so guards must treat "authenticated without profile" as pending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub profile: Option<Profile>,
}

impl AuthState {
    /// Initial state while the current session is being looked up.
    pub fn resolving() -> Self {
        Self { is_loading: true, ..Self::default() }
    }

    /// Role of the loaded profile, if any.
    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|p| p.role)
    }
}

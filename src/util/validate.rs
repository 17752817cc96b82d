//! Field validation and password strength scoring for the auth form.
//!
//! DESIGN
//! ======
//! Every rule is a pure function of one field value plus the form mode and
//! the current password, so the controller can re-run it on each change and
//! tests need no UI harness.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::state::auth::Role;
use crate::state::auth_form::{AuthMode, Field};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 2;
/// Strength a new password needs before registration accepts it.
pub const MIN_REGISTER_STRENGTH: u8 = 60;

const STRENGTH_STEP: u8 = 20;

/// Values other fields contribute to a field's rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationContext<'a> {
    /// Current password, compared against the confirmation field.
    pub password: &'a str,
    pub accept_terms: bool,
}

/// Coarse password strength shown under the password input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthBand {
    Weak,
    Medium,
    Strong,
}

impl StrengthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..40 => Self::Weak,
            40..80 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// BEM modifier for the strength meter fill.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Weak => "strength-meter__fill--weak",
            Self::Medium => "strength-meter__fill--medium",
            Self::Strong => "strength-meter__fill--strong",
        }
    }
}

/// Score a password 0..=100, 20 points per satisfied criterion.
pub fn password_strength(password: &str) -> u8 {
    let criteria = [
        password.chars().count() >= MIN_PASSWORD_LEN,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    criteria.iter().filter(|met| **met).fold(0_u8, |score, _| score + STRENGTH_STEP)
}

/// Basic `local@domain.tld` shape check.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.contains('@') && !s.chars().any(char::is_whitespace);
    if !clean(local) || !clean(domain) {
        return false;
    }
    // Some dot must have text on both sides.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Permissive phone check: optional leading `+`, then digits, spaces, dashes, parens.
pub fn is_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}

/// Validate one field, returning the message to show or `None` when valid.
///
/// Register-only fields always pass in login mode.
pub fn validate(field: Field, value: &str, mode: AuthMode, ctx: &ValidationContext<'_>) -> Option<String> {
    let register = mode == AuthMode::Register;
    let message = match field {
        Field::Email => {
            if value.is_empty() {
                Some("Email address is required")
            } else if !is_email(value) {
                Some("Please enter a valid email address")
            } else {
                None
            }
        }
        Field::Password => {
            if value.is_empty() {
                Some("Password is required")
            } else if value.chars().count() < MIN_PASSWORD_LEN {
                Some("Password must be at least 8 characters")
            } else if register && password_strength(value) < MIN_REGISTER_STRENGTH {
                Some("Password must be stronger")
            } else {
                None
            }
        }
        Field::ConfirmPassword if register => {
            if value.is_empty() {
                Some("Please confirm your password")
            } else if !ctx.password.is_empty() && value != ctx.password {
                // An empty password is reported on its own field only.
                Some("Passwords do not match")
            } else {
                None
            }
        }
        Field::FullName if register => {
            if value.is_empty() {
                Some("Full name is required")
            } else if value.chars().count() < MIN_NAME_LEN {
                Some("Name must be at least 2 characters")
            } else {
                None
            }
        }
        Field::Role => Role::parse(value).is_none().then_some("Please select your role"),
        Field::Phone => (!value.is_empty() && !is_phone(value)).then_some("Please enter a valid phone number"),
        Field::AcceptTerms if register => (!ctx.accept_terms).then_some("You must accept the terms and conditions"),
        Field::ConfirmPassword | Field::FullName | Field::AcceptTerms => None,
    };
    message.map(str::to_owned)
}

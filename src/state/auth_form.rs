//! Sign-in / registration form state and submission lifecycle.
//!
//! DESIGN
//! ======
//! `AuthForm` is plain data driven by the page's input handlers. Each field
//! change re-runs that field's rule from `util::validate`; submission is split
//! into [`AuthForm::begin_submit`] and [`AuthForm::finish_submit`] so the page
//! can hold the form in a signal across the await on the auth service.
//!
//! SUBMISSION
//! ==========
//! `Idle -> Submitting -> Idle`. A second submit while `Submitting` is a
//! no-op, and every outcome (success, rejection, fault) returns to `Idle`.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use std::collections::BTreeMap;

use crate::net::api::{AuthError, AuthService};
use crate::net::types::{AuthOutcome, LoginRequest, RegisterRequest};
use crate::state::auth::Role;
use crate::util::validate::{StrengthBand, ValidationContext, password_strength, validate};

const LOGIN_SUCCESS: &str = "Login successful! Redirecting...";
const REGISTER_SUCCESS: &str = "Registration successful! Please check your email to verify your account.";
const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
const REGISTER_FAILED: &str = "Registration failed. Please try again.";
const UNEXPECTED_FAILURE: &str = "An unexpected error occurred. Please try again.";

/// Which tab of the auth page is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Validated inputs of the auth form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Role,
    Phone,
    AcceptTerms,
}

impl Field {
    /// Fields re-validated before submitting in `mode`.
    pub fn for_mode(mode: AuthMode) -> &'static [Field] {
        match mode {
            AuthMode::Login => &[Field::Email, Field::Password, Field::Role],
            AuthMode::Register => &[
                Field::FullName,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::Role,
                Field::Phone,
                Field::AcceptTerms,
            ],
        }
    }
}

/// Raw values entered by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
    pub phone: String,
    pub remember_me: bool,
    pub accept_terms: bool,
}

/// Inline validation messages keyed by field.
///
/// A field that passes validation has no entry at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn apply(&mut self, field: Field, result: Option<String>) {
        match result {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Message shown above the form after a submit or a rejected action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: BannerKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, text: text.into() }
    }
}

/// Third-party identity providers offered on the page but not wired up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentityProvider {
    Google,
    GitHub,
}

impl IdentityProvider {
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
        }
    }
}

/// Call prepared by [`AuthForm::begin_submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl SubmitRequest {
    /// Send this request to the matching auth service operation.
    ///
    /// # Errors
    ///
    /// Propagates the service's [`AuthError`].
    pub async fn dispatch<S: AuthService>(&self, service: &S) -> Result<AuthOutcome, AuthError> {
        match self {
            Self::Login(request) => service.login(request).await,
            Self::Register(request) => service.register(request).await,
        }
    }
}

/// Complete state of the auth page form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
    /// Strength of `fields.password`, recomputed on every password change.
    pub strength: u8,
    pub banner: Option<Banner>,
    pub show_password: bool,
    pub show_confirm_password: bool,
    /// Mode of the request in flight, so its banner matches what was sent.
    submitted_as: AuthMode,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn strength_band(&self) -> StrengthBand {
        StrengthBand::from_score(self.strength)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Current raw value of a text field; checkbox fields read as empty.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.fields.full_name,
            Field::Email => &self.fields.email,
            Field::Password => &self.fields.password,
            Field::ConfirmPassword => &self.fields.confirm_password,
            Field::Role => self.fields.role.map_or("", Role::as_str),
            Field::Phone => &self.fields.phone,
            Field::AcceptTerms => "",
        }
    }

    /// Switch tabs. Entered values survive; errors and banners do not.
    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.errors.clear();
        self.banner = None;
    }

    /// Store a text input's new value and re-validate that field.
    ///
    /// `Field::Role` expects the role's wire name (empty for no selection) and
    /// `Field::AcceptTerms` is ignored here; use [`Self::set_role`] and
    /// [`Self::set_accept_terms`] for typed updates.
    pub fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.fields.full_name = value,
            Field::Email => self.fields.email = value,
            Field::Password => {
                self.fields.password = value;
                self.strength = password_strength(&self.fields.password);
            }
            Field::ConfirmPassword => self.fields.confirm_password = value,
            Field::Role => self.fields.role = Role::parse(&value),
            Field::Phone => self.fields.phone = value,
            Field::AcceptTerms => return,
        }
        self.revalidate(field);
        if field == Field::Password && self.errors.contains(Field::ConfirmPassword) {
            // Keep a shown mismatch message in step with the new password.
            self.revalidate(Field::ConfirmPassword);
        }
        self.clear_error_banner();
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.fields.role = role;
        self.revalidate(Field::Role);
        self.clear_error_banner();
    }

    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.fields.remember_me = remember_me;
        self.clear_error_banner();
    }

    pub fn set_accept_terms(&mut self, accept_terms: bool) {
        self.fields.accept_terms = accept_terms;
        self.revalidate(Field::AcceptTerms);
        self.clear_error_banner();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_confirm_visibility(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    /// Start a submission if none is in flight and every field for the
    /// current mode passes validation.
    ///
    /// Returns the request to dispatch; `None` leaves the form idle (or still
    /// submitting, for a re-entrant call).
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.is_submitting() {
            return None;
        }
        self.banner = None;
        if !self.validate_all() {
            return None;
        }
        let request = self.build_request()?;
        self.status = SubmissionStatus::Submitting;
        self.submitted_as = self.mode;
        Some(request)
    }

    /// Record the auth service's answer and return to `Idle`.
    ///
    /// Returns `true` when the service accepted the request.
    pub fn finish_submit(&mut self, outcome: Result<AuthOutcome, AuthError>) -> bool {
        self.status = SubmissionStatus::Idle;
        let (success_text, failure_text) = match self.submitted_as {
            AuthMode::Login => (LOGIN_SUCCESS, LOGIN_FAILED),
            AuthMode::Register => (REGISTER_SUCCESS, REGISTER_FAILED),
        };
        match outcome {
            Ok(AuthOutcome { success: true, .. }) => {
                self.banner = Some(Banner::success(success_text));
                true
            }
            Ok(AuthOutcome { error, .. }) => {
                let text = error.filter(|e| !e.trim().is_empty()).unwrap_or_else(|| failure_text.to_owned());
                self.banner = Some(Banner::error(text));
                false
            }
            Err(e) => {
                leptos::logging::error!("auth request failed: {e}");
                self.banner = Some(Banner::error(UNEXPECTED_FAILURE));
                false
            }
        }
    }

    /// Run a whole submission against `service`.
    ///
    /// Returns `true` on success; `false` when rejected, failed, or not started.
    pub async fn submit<S: AuthService>(&mut self, service: &S) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let outcome = request.dispatch(service).await;
        self.finish_submit(outcome)
    }

    /// Third-party sign-in is not offered; report that instead of doing nothing.
    pub fn social_sign_in(&mut self, provider: IdentityProvider) {
        self.banner = Some(Banner::error(format!(
            "{} sign-in is not available. Please use email and password.",
            provider.label()
        )));
    }

    fn clear_error_banner(&mut self) {
        if self.banner.as_ref().is_some_and(|b| b.kind == BannerKind::Error) {
            self.banner = None;
        }
    }

    fn revalidate(&mut self, field: Field) {
        let ctx = ValidationContext { password: &self.fields.password, accept_terms: self.fields.accept_terms };
        let result = validate(field, self.value(field), self.mode, &ctx);
        self.errors.apply(field, result);
    }

    fn validate_all(&mut self) -> bool {
        for field in Field::for_mode(self.mode) {
            self.revalidate(*field);
        }
        self.errors.is_empty()
    }

    fn build_request(&self) -> Option<SubmitRequest> {
        let fields = &self.fields;
        Some(match self.mode {
            AuthMode::Login => SubmitRequest::Login(LoginRequest {
                email: fields.email.clone(),
                password: fields.password.clone(),
                remember_me: fields.remember_me,
            }),
            AuthMode::Register => SubmitRequest::Register(RegisterRequest {
                email: fields.email.clone(),
                password: fields.password.clone(),
                full_name: fields.full_name.clone(),
                role: fields.role?,
                phone: Some(fields.phone.clone()).filter(|p| !p.is_empty()),
            }),
        })
    }
}

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the session snapshot read by guards, `session` resolves it, and
//! `auth_form` holds the sign-in/registration form owned by the auth page.

pub mod auth;
pub mod auth_form;
pub mod session;

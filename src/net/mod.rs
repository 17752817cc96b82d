//! Networking modules for the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the auth service's REST endpoints behind the [`api::AuthService`]
//! trait, and `types` defines the wire schema shared with that service.

pub mod api;
pub mod types;

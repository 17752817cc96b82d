//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decision and validation logic lives here as pure functions so pages and
//! components stay thin and the rules are testable without a browser.

pub mod access;
pub mod auth;
pub mod validate;

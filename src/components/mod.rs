//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared session from Leptos context and render route
//! chrome; decisions they make come from `util`.

pub mod loading_screen;
pub mod protected_route;

//! # digivent
//!
//! Leptos + WASM frontend for the Digi-Vent event platform's sign-in flow.
//!
//! This crate contains the combined sign-in / registration page, the route
//! guard that admits visitors by session and role, the session snapshot those
//! share, and the client for the external auth service. Decision logic
//! (`util::access`, `util::validate`, `state::auth_form`) is plain Rust with no
//! browser dependency.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

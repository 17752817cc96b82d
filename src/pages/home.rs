//! Public landing page (`/`).

use leptos::prelude::*;

use crate::state::auth::{AuthState, Role};
use crate::util::access::LOGIN_PATH;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let target = move || auth.with(|s| s.role().map_or(LOGIN_PATH, Role::home_path));
    let label = move || auth.with(|s| if s.role().is_some() { "Open Dashboard" } else { "Sign In" });

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Digi-Vent"</h1>
            <p class="home-page__tagline">"Plan events and coordinate volunteers in one place."</p>
            <a class="home-page__cta" href=target>{label}</a>
        </div>
    }
}

//! Landing page for role-gate denials (`/403`).

use leptos::prelude::*;

use crate::state::auth::{AuthState, Role};

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let home = move || auth.with(|s| s.role().map_or("/", Role::home_path));

    view! {
        <div class="status-page">
            <h1 class="status-page__code">"403"</h1>
            <p class="status-page__message">"You don't have permission to view this page."</p>
            <a class="status-page__link" href=home>"Go to your dashboard"</a>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1 class="status-page__code">"404"</h1>
            <p class="status-page__message">"Page not found."</p>
            <a class="status-page__link" href="/">"Back to Home"</a>
        </div>
    }
}

//! Full-page spinner shown while a guarded route waits on the session.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__message">{message}</p>
        </div>
    }
}

//! Role home pages reached after sign-in.
//!
//! Both render inside `ProtectedRoute`, so a profile is always loaded here.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::state::auth::{AuthState, Role};

fn greeting(state: &AuthState) -> String {
    match &state.profile {
        Some(profile) if !profile.full_name.is_empty() => format!("Welcome, {}", profile.full_name),
        Some(profile) => format!("Welcome, {}", profile.email),
        None => "Welcome".to_owned(),
    }
}

/// Organizer and administrator dashboard (`/admin/dashboard`).
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="dashboard dashboard--admin">
            <h1>{move || auth.with(greeting)}</h1>
            <p class="dashboard__role">{move || auth.with(|s| s.role().map_or("", Role::label))}</p>
        </div>
    }
}

/// Volunteer dashboard (`/dashboard/volunteer`).
#[component]
pub fn VolunteerDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="dashboard dashboard--volunteer">
            <h1>{move || auth.with(greeting)}</h1>
            <p class="dashboard__role">"Volunteer"</p>
        </div>
    }
}

/// Account details for any signed-in role (`/profile`).
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = move || auth.with(|s| s.profile.clone());

    view! {
        <div class="profile-page">
            {move || {
                profile()
                    .map(|p| {
                        view! {
                            <dl class="profile-page__details">
                                <dt>"Name"</dt>
                                <dd>{p.full_name}</dd>
                                <dt>"Email"</dt>
                                <dd>{p.email}</dd>
                                <dt>"Role"</dt>
                                <dd>{p.role.label()}</dd>
                                <dt>"Phone"</dt>
                                <dd>{p.phone.unwrap_or_else(|| "Not provided".to_owned())}</dd>
                            </dl>
                        }
                    })
            }}
        </div>
    }
}

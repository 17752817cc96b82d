//! Route wrapper that admits visitors by session state and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every guarded page in `app`. The decision itself is
//! `util::access::decide`; this component only feeds it the session context
//! and router location, and turns redirect decisions into history-replacing
//! navigations.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::{AuthState, Role};
use crate::util::access::{GuardDecision, RequestedLocation, decide};

/// Render `children` only when the session admits the visitor.
///
/// Without `required_role` the route is role-agnostic and only steers users
/// out of the other role's area.
#[component]
pub fn ProtectedRoute(#[prop(optional)] required_role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        let search = location.search.get();
        auth.with(|session| decide(session, required_role, &RequestedLocation { path: &path, search: &search }))
    });

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Loading(kind) => view! { <LoadingScreen message=kind.message()/> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::pages::{
    auth::AuthPage,
    dashboard::{AdminDashboardPage, ProfilePage, VolunteerDashboardPage},
    forbidden::{ForbiddenPage, NotFoundPage},
    home::HomePage,
};
use crate::state::auth::{AuthState, Role};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and client configuration as context and sets up
/// client-side routing. The session starts unresolved; in the browser it is
/// looked up immediately.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::resolving());

    provide_context(config.clone());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::session::load_session(auth, config));
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <Stylesheet id="leptos" href="/pkg/digivent.css"/>
        <Title text="Digi-Vent"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=AuthPage/>
                <Route path=StaticSegment("403") view=ForbiddenPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| view! {
                        <ProtectedRoute required_role=Role::Organizer>
                            <AdminDashboardPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("volunteer"))
                    view=|| view! {
                        <ProtectedRoute required_role=Role::Volunteer>
                            <VolunteerDashboardPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! {
                        <ProtectedRoute>
                            <ProfilePage/>
                        </ProtectedRoute>
                    }
                />
            </Routes>
        </Router>
    }
}

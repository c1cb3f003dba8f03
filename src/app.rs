//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::pages::{
    dashboard::DashboardPage, forum::ForumPage, landing::LandingPage, leaderboard::LeaderboardPage,
    login::LoginPage, mission_detail::MissionDetailPage, missions::MissionsPage,
    register::RegisterPage, resources::ResourcesPage,
};
use crate::state::{notifications::NotificationsState, session::SessionState, ui::UiState};
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
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
/// Provides the session/UI/notification contexts, rehydrates the session
/// from durable storage, then re-validates it against the backend. The
/// transport's credential-rejected hook is wired to a `/login` navigation
/// here, keeping the HTTP layer free of navigation concerns.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    let ui = RwSignal::new(UiState {
        dark_mode: theme::read_preference(),
        nav_open: false,
    });
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(notifications);

    theme::apply(ui.get_untracked().dark_mode);

    #[cfg(feature = "hydrate")]
    {
        crate::net::http::on_credential_rejected(|| {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });

        // Passive re-validation of whatever restore() optimistically loaded.
        leptos::task::spawn_local(crate::state::session::check_auth(session));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/nird-client.css"/>
        <Title text="NIRD"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("missions")
                    view=|| view! { <RequireAuth><MissionsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("missions"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><MissionDetailPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("leaderboard")
                    view=|| view! { <RequireAuth><LeaderboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("forum")
                    view=|| view! { <RequireAuth><ForumPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("resources")
                    view=|| view! { <RequireAuth><ResourcesPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}

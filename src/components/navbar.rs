//! Top navigation bar for authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notifications_dropdown::NotificationsDropdown;
use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;
use crate::util::theme;

/// Navigation bar: links, notification bell, dark-mode toggle, identity,
/// and the logout button.
#[component]
pub fn Navbar() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let display_name = move || {
        session_signal
            .get()
            .user
            .map(|u| u.full_name)
            .unwrap_or_default()
    };
    let role_label = move || {
        session_signal
            .get()
            .user
            .map(|u| u.role.label())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session::logout(session_signal);
        navigate("/login", NavigateOptions::default());
    };

    let on_theme = move |_| {
        ui.update(|u| u.dark_mode = theme::toggle(u.dark_mode));
    };

    let on_nav_toggle = move |_| ui.update(|u| u.nav_open = !u.nav_open);
    let links_class = move || {
        if ui.get().nav_open {
            "navbar__links navbar__links--open"
        } else {
            "navbar__links"
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/dashboard">
                "NIRD"
            </a>
            <button class="navbar__burger" on:click=on_nav_toggle title="Menu">
                "☰"
            </button>
            <div class=links_class>
                <a href="/dashboard">"Tableau de bord"</a>
                <a href="/missions">"Missions"</a>
                <a href="/leaderboard">"Classement"</a>
                <a href="/forum">"Forum"</a>
                <a href="/resources">"Ressources"</a>
            </div>
            <div class="navbar__actions">
                <NotificationsDropdown/>
                <button class="navbar__theme" on:click=on_theme title="Mode sombre">
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <span class="navbar__identity">
                    <span class="navbar__name">{display_name}</span>
                    <span class="navbar__role">{role_label}</span>
                </span>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Se déconnecter"
                </button>
            </div>
        </nav>
    }
}

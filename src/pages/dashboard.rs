//! Dashboard page: greeting, point/level statistics, and active missions.

use leptos::prelude::*;

use crate::components::mission_card::MissionCard;
use crate::components::navbar::Navbar;
use crate::components::stat_card::StatCard;
use crate::state::session::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session_signal
            .get()
            .user
            .map(|u| format!("Bonjour, {} !", u.full_name))
            .unwrap_or_default()
    };
    let points = move || {
        session_signal
            .get()
            .user
            .map(|u| u.points.to_string())
            .unwrap_or_default()
    };
    let level = move || {
        session_signal
            .get()
            .user
            .map(|u| u.level.to_string())
            .unwrap_or_default()
    };
    let role = move || {
        session_signal
            .get()
            .user
            .map(|u| u.role.label().to_owned())
            .unwrap_or_default()
    };

    // Active missions preview — same list the missions page shows, capped.
    let missions = LocalResource::new(|| crate::net::api::fetch_missions(None));

    view! {
        <div class="dashboard-page">
            <Navbar/>
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
            </header>

            <div class="dashboard-page__stats">
                <StatCard label="Points" value=Signal::derive(points) hint="Total gagné"/>
                <StatCard label="Niveau" value=Signal::derive(level)/>
                <StatCard label="Rôle" value=Signal::derive(role)/>
            </div>

            <section class="dashboard-page__missions">
                <div class="dashboard-page__section-header">
                    <h2>"Missions en cours"</h2>
                    <a class="btn btn--link" href="/missions">
                        "Voir tout"
                    </a>
                </div>
                <Suspense fallback=move || view! { <p>"Chargement des missions..."</p> }>
                    {move || {
                        missions
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    let preview = list
                                        .into_iter()
                                        .filter(|m| m.is_active)
                                        .take(4)
                                        .map(|m| view! { <MissionCard mission=m/> })
                                        .collect::<Vec<_>>();
                                    if preview.is_empty() {
                                        view! { <p class="dashboard-page__empty">"Aucune mission active pour le moment."</p> }
                                            .into_any()
                                    } else {
                                        view! { <div class="dashboard-page__cards">{preview}</div> }
                                            .into_any()
                                    }
                                }
                                Err(e) => {
                                    view! { <p class="dashboard-page__error">{e.message()}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

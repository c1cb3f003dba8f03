//! Missions list with a difficulty filter.

use leptos::prelude::*;

use crate::components::mission_card::MissionCard;
use crate::components::navbar::Navbar;
use crate::net::types::MissionDifficulty;

#[component]
pub fn MissionsPage() -> impl IntoView {
    let filter = RwSignal::new(None::<MissionDifficulty>);

    // Refetches whenever the filter changes.
    let missions = LocalResource::new(move || {
        let difficulty = filter.get();
        async move { crate::net::api::fetch_missions(difficulty).await }
    });

    let filter_button = move |value: Option<MissionDifficulty>, label: &'static str| {
        let class = move || {
            if filter.get() == value {
                "btn btn--filter btn--filter-active"
            } else {
                "btn btn--filter"
            }
        };
        view! {
            <button class=class on:click=move |_| filter.set(value)>
                {label}
            </button>
        }
    };

    view! {
        <div class="missions-page">
            <Navbar/>
            <header class="missions-page__header">
                <h1>"Missions"</h1>
                <div class="missions-page__filters">
                    {filter_button(None, "Toutes")}
                    {filter_button(Some(MissionDifficulty::Easy), "Facile")}
                    {filter_button(Some(MissionDifficulty::Medium), "Moyen")}
                    {filter_button(Some(MissionDifficulty::Hard), "Difficile")}
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Chargement des missions..."</p> }>
                {move || {
                    missions
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! { <p class="missions-page__empty">"Aucune mission ne correspond à ce filtre."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="missions-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|m| view! { <MissionCard mission=m/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(e) => view! { <p class="missions-page__error">{e.message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

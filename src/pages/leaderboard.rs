//! Team leaderboard with period selector.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::LeaderboardEntry;

const PERIODS: [(&str, &str); 4] = [
    ("all-time", "Général"),
    ("monthly", "Ce mois"),
    ("weekly", "Cette semaine"),
    ("daily", "Aujourd'hui"),
];

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let period = RwSignal::new("all-time");

    let leaderboard = LocalResource::new(move || {
        let selected = period.get();
        async move { crate::net::api::fetch_leaderboard(selected).await }
    });

    view! {
        <div class="leaderboard-page">
            <Navbar/>
            <header class="leaderboard-page__header">
                <h1>"Classement des équipes"</h1>
                <div class="leaderboard-page__periods">
                    {PERIODS
                        .into_iter()
                        .map(|(value, label)| {
                            let class = move || {
                                if period.get() == value {
                                    "btn btn--filter btn--filter-active"
                                } else {
                                    "btn btn--filter"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| period.set(value)>
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Chargement du classement..."</p> }>
                {move || {
                    leaderboard
                        .get()
                        .map(|result| match result {
                            Ok(board) => {
                                let own_team = board.current_user_team.as_ref().map(|e| e.team_id);
                                view! {
                                    <table class="leaderboard">
                                        <thead>
                                            <tr>
                                                <th>"#"</th>
                                                <th>"Équipe"</th>
                                                <th>"École"</th>
                                                <th>"Missions"</th>
                                                <th>"Points"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {board
                                                .entries
                                                .into_iter()
                                                .map(|entry| {
                                                    let highlight = own_team == Some(entry.team_id);
                                                    view! { <LeaderboardRow entry=entry highlight=highlight/> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="leaderboard-page__error">{e.message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn LeaderboardRow(entry: LeaderboardEntry, highlight: bool) -> impl IntoView {
    let class = if highlight {
        "leaderboard__row leaderboard__row--own"
    } else {
        "leaderboard__row"
    };
    view! {
        <tr class=class>
            <td>{entry.rank}</td>
            <td>{entry.team_name}</td>
            <td>{entry.school_name.unwrap_or_default()}</td>
            <td>{entry.completed_missions}</td>
            <td class="leaderboard__points">{entry.total_points}</td>
        </tr>
    }
}

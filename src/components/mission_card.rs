//! Mission summary card for the missions list.

use leptos::prelude::*;

use crate::net::types::Mission;

/// Card linking to a mission's detail page, with points and difficulty.
#[component]
pub fn MissionCard(mission: Mission) -> impl IntoView {
    let difficulty_class = match mission.difficulty {
        crate::net::types::MissionDifficulty::Easy => "mission-card__badge mission-card__badge--easy",
        crate::net::types::MissionDifficulty::Medium => {
            "mission-card__badge mission-card__badge--medium"
        }
        crate::net::types::MissionDifficulty::Hard => "mission-card__badge mission-card__badge--hard",
    };
    let href = format!("/missions/{}", mission.id);
    let category = mission.category.as_ref().map(|c| c.name.clone());

    view! {
        <a class="mission-card" href=href>
            <div class="mission-card__header">
                <h3 class="mission-card__title">{mission.title}</h3>
                <span class=difficulty_class>{mission.difficulty.label()}</span>
            </div>
            <p class="mission-card__description">{mission.description}</p>
            <div class="mission-card__footer">
                {category.map(|name| view! { <span class="mission-card__category">{name}</span> })}
                <span class="mission-card__points">{format!("{} pts", mission.points)}</span>
            </div>
        </a>
    }
}

//! Mission detail page with the text submission form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::navbar::Navbar;
use crate::net::types::Mission;

#[component]
pub fn MissionDetailPage() -> impl IntoView {
    let params = use_params_map();
    let mission_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let mission = LocalResource::new(move || {
        let id = mission_id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_mission(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <div class="mission-detail-page">
            <Navbar/>
            <Suspense fallback=move || view! { <p>"Chargement de la mission..."</p> }>
                {move || {
                    mission
                        .get()
                        .map(|result| match result {
                            Ok(Some(m)) => view! { <MissionBody mission=m/> }.into_any(),
                            Ok(None) => view! { <p class="mission-detail-page__error">"Mission introuvable."</p> }.into_any(),
                            Err(e) => view! { <p class="mission-detail-page__error">{e.message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Mission description plus the submission form.
#[component]
fn MissionBody(mission: Mission) -> impl IntoView {
    let mission_id = mission.id;
    let answer = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = answer.get();
        if text.trim().is_empty() {
            error.set(Some("Décrivez ce que vous avez réalisé.".to_owned()));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_mission(mission_id, text.trim()).await {
                    Ok(_) => submitted.set(true),
                    Err(e) => error.set(Some(e.message())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    let instructions = mission.instructions.clone();
    let deadline = mission.deadline.clone();

    view! {
        <article class="mission-detail">
            <header class="mission-detail__header">
                <h1>{mission.title.clone()}</h1>
                <span class="mission-detail__points">{format!("{} pts", mission.points)}</span>
                <span class="mission-detail__difficulty">{mission.difficulty.label()}</span>
            </header>

            <p class="mission-detail__description">{mission.description.clone()}</p>
            {instructions.map(|text| view! {
                <section class="mission-detail__instructions">
                    <h2>"Instructions"</h2>
                    <p>{text}</p>
                </section>
            })}
            {deadline.map(|d| view! { <p class="mission-detail__deadline">{format!("À rendre avant le {d}")}</p> })}

            <Show
                when=move || !submitted.get()
                fallback=|| view! {
                    <p class="mission-detail__done">
                        "Votre réponse a été envoyée. Elle sera examinée par un enseignant."
                    </p>
                }
            >
                <form class="mission-detail__form" on:submit=on_submit>
                    <label class="mission-detail__label">
                        "Votre réponse"
                        <textarea
                            class="mission-detail__textarea"
                            prop:value=move || answer.get()
                            on:input=move |ev| answer.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    {move || {
                        error
                            .get()
                            .map(|msg| view! { <p class="mission-detail__error">{msg}</p> })
                    }}
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Envoi..." } else { "Soumettre" }}
                    </button>
                </form>
            </Show>
        </article>
    }
}

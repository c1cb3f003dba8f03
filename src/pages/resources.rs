//! Educational resources page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::http;
use crate::net::types::Resource;

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let resources = LocalResource::new(|| crate::net::api::fetch_resources());

    view! {
        <div class="resources-page">
            <Navbar/>
            <header class="resources-page__header">
                <h1>"Ressources"</h1>
                <p>"Guides, vidéos et documents sur le recyclage des déchets électroniques."</p>
            </header>

            <Suspense fallback=move || view! { <p>"Chargement des ressources..."</p> }>
                {move || {
                    resources
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! { <p class="resources-page__empty">"Aucune ressource disponible."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="resources-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|r| view! { <ResourceCard resource=r/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(e) => view! { <p class="resources-page__error">{e.message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ResourceCard(resource: Resource) -> impl IntoView {
    // External link wins; uploaded files resolve against the upload base.
    let href = resource
        .url
        .clone()
        .or_else(|| resource.file_path.as_deref().map(http::upload_url))
        .unwrap_or_default();
    let kind = resource.resource_type.clone().unwrap_or_else(|| "document".to_owned());

    view! {
        <a class="resource-card" href=href target="_blank" rel="noopener">
            <span class="resource-card__type">{kind}</span>
            <h3 class="resource-card__title">{resource.title}</h3>
            {resource
                .description
                .map(|d| view! { <p class="resource-card__description">{d}</p> })}
        </a>
    }
}

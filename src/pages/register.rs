//! Registration page. A successful registration chains straight into the
//! login credential exchange, so the user lands on the dashboard already
//! authenticated.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{RegisterRequest, UserRole};
use crate::state::session::{self, SessionState};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("student".to_owned());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let data = RegisterRequest {
            username: username.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            full_name: full_name.get().trim().to_owned(),
            role: if role.get() == "teacher" { UserRole::Teacher } else { UserRole::Student },
            school_id: None,
        };
        if data.username.is_empty()
            || data.email.is_empty()
            || data.password.is_empty()
            || data.full_name.is_empty()
        {
            error.set(Some("Veuillez remplir tous les champs.".to_owned()));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session::register(session_signal, data).await {
                    Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                    Err(e) => error.set(Some(e.message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = data;
            let _ = &navigate;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"Créer un compte"</h1>
                <p class="auth-page__subtitle">"Rejoignez la communauté NIRD"</p>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Nom d'utilisateur"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Nom complet"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Mot de passe"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Je suis"
                        <select
                            class="auth-form__input"
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value="student" selected=move || role.get() == "student">
                                "Élève"
                            </option>
                            <option value="teacher" selected=move || role.get() == "teacher">
                                "Enseignant"
                            </option>
                        </select>
                    </label>

                    {move || {
                        error
                            .get()
                            .map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                    }}

                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || session_signal.get().loading
                    >
                        {move || if session_signal.get().loading { "Création..." } else { "S'inscrire" }}
                    </button>
                </form>

                <p class="auth-page__switch">
                    "Déjà inscrit ? "
                    <a href="/login">"Se connecter"</a>
                </p>
            </div>
        </div>
    }
}

//! Login page with the email/password credential form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

/// Login form. Failures surface inline under the form; success navigates
/// to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    // Already signed in — straight to the dashboard.
    Effect::new({
        let navigate = navigate.clone();
        move || {
            if session_signal.get().authenticated {
                navigate("/dashboard", NavigateOptions::default());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some(
                "Veuillez renseigner votre email et votre mot de passe.".to_owned(),
            ));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session::login(session_signal, &email_value, &password_value).await {
                    Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                    Err(e) => error.set(Some(e.message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"NIRD"</h1>
                <p class="auth-page__subtitle">"Connectez-vous à votre compte"</p>

                <form class="auth-form" on:submit=on_submit>
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
                        {move || if session_signal.get().loading { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>

                <p class="auth-page__switch">
                    "Pas encore de compte ? "
                    <a href="/register">"S'inscrire"</a>
                </p>
            </div>
        </div>
    }
}

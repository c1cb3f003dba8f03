//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1>"NIRD"</h1>
                <p class="landing-page__tagline">
                    "Apprenez le recyclage des déchets électroniques en accomplissant des missions, "
                    "gagnez des points et faites briller votre équipe."
                </p>
                <div class="landing-page__actions">
                    <a class="btn btn--primary" href="/register">
                        "Créer un compte"
                    </a>
                    <a class="btn" href="/login">
                        "Se connecter"
                    </a>
                </div>
            </header>

            <section class="landing-page__features">
                <div class="landing-page__feature">
                    <h3>"Missions"</h3>
                    <p>"Des défis concrets autour de la collecte et du réemploi des e-déchets."</p>
                </div>
                <div class="landing-page__feature">
                    <h3>"Classement"</h3>
                    <p>"Comparez les points de votre équipe avec les autres écoles."</p>
                </div>
                <div class="landing-page__feature">
                    <h3>"Forum"</h3>
                    <p>"Échangez vos astuces avec les élèves et les enseignants."</p>
                </div>
            </section>
        </div>
    }
}

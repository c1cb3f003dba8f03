//! Route guard for authenticated-only views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Renders its children while the session is authenticated; otherwise
/// redirects to `/login`. Reads the session signal only, no network calls,
/// so navigation decisions are immediate.
///
/// The redirect waits for any in-flight login to settle (`loading`) and for
/// the startup re-validation to reach a verdict (`checked`). A stored token
/// whose snapshot write was interrupted therefore gets one chance to
/// re-validate before the user is bounced.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if state.checked && !state.loading && !state.authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.get().authenticated fallback=|| ()>
            {children()}
        </Show>
    }
}

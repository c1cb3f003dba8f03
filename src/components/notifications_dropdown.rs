//! Notification bell with unread badge and dropdown panel.
//!
//! The list and unread counter are refreshed by a fixed 30-second poll
//! while a session is authenticated. Mark-read actions call the backend
//! first and update local state on success.

#[cfg(test)]
#[path = "notifications_dropdown_test.rs"]
mod notifications_dropdown_test;

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
const POLL_INTERVAL_MS: u64 = 30_000;

/// Cancellation flag shared between a poll task and the component that
/// spawned it. `on_cleanup` cancels its clone, so the loop terminates when
/// the bell unmounts instead of outliving it.
#[derive(Clone, Default)]
pub struct PollCancellation(Rc<Cell<bool>>);

impl PollCancellation {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Bell button plus dropdown. Expects the session and notifications
/// contexts; starts a polling loop on mount (browser only) that stops on
/// unmount.
#[component]
pub fn NotificationsDropdown() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    #[cfg(feature = "hydrate")]
    {
        let cancellation = PollCancellation::default();
        on_cleanup({
            let cancellation = cancellation.clone();
            move || cancellation.cancel()
        });
        leptos::task::spawn_local(poll_loop(session, notifications, cancellation));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    let unread_badge = move || {
        let unread = notifications.get().unread;
        if unread == 0 {
            return None;
        }
        let label = if unread > 9 { "9+".to_owned() } else { unread.to_string() };
        Some(view! { <span class="notifications__badge">{label}</span> })
    };

    let toggle = move |_| notifications.update(|n| n.open = !n.open);

    let on_mark_all = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::mark_all_notifications_read().await.is_ok() {
                    notifications.update(NotificationsState::mark_all_read);
                }
            });
        }
    };

    view! {
        <div class="notifications">
            <button class="notifications__bell" on:click=toggle title="Notifications">
                <svg viewBox="0 0 24 24" aria-hidden="true">
                    <path d="M12 22a2 2 0 0 0 2-2h-4a2 2 0 0 0 2 2zm6-6v-5a6 6 0 1 0-12 0v5l-2 2v1h16v-1z"></path>
                </svg>
                {unread_badge}
            </button>

            <Show when=move || notifications.get().open>
                <div class="notifications__panel">
                    <div class="notifications__header">
                        <h3>"Notifications"</h3>
                        <button class="btn btn--link" on:click=on_mark_all>
                            "Tout marquer comme lu"
                        </button>
                    </div>
                    <div class="notifications__list">
                        {move || {
                            let items = notifications.get().items;
                            if items.is_empty() {
                                return view! {
                                    <p class="notifications__empty">"Aucune notification"</p>
                                }
                                    .into_any();
                            }
                            items
                                .into_iter()
                                .map(|item| {
                                    view! { <NotificationRow id=item.id title=item.title message=item.message is_read=item.is_read/> }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// One row of the dropdown; clicking an unread row marks it read.
#[component]
fn NotificationRow(id: i64, title: String, message: String, is_read: bool) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let row_class = if is_read {
        "notifications__item"
    } else {
        "notifications__item notifications__item--unread"
    };

    let on_click = move |_| {
        if is_read {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::mark_notification_read(id).await.is_ok() {
                    notifications.update(|n| n.mark_read(id));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notifications;
        }
    };

    view! {
        <div class=row_class on:click=on_click>
            <span class="notifications__title">{title}</span>
            <span class="notifications__message">{message}</span>
        </div>
    }
}

/// Poll the list and unread counter while authenticated, until cancelled.
#[cfg(feature = "hydrate")]
async fn poll_loop(
    session: RwSignal<SessionState>,
    notifications: RwSignal<NotificationsState>,
    cancellation: PollCancellation,
) {
    use leptos::prelude::GetUntracked;

    loop {
        if cancellation.is_cancelled() {
            return;
        }
        if session.get_untracked().authenticated {
            let items = crate::net::api::fetch_notifications().await;
            let unread = crate::net::api::fetch_unread_count().await;
            if let (Ok(items), Ok(unread)) = (items, unread) {
                notifications.update(|n| n.refresh(items, unread));
            }
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

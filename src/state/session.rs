//! Session store: the authenticated identity, its bearer token, and the
//! four operations that may change them.
//!
//! OWNERSHIP
//! =========
//! The in-memory [`SessionState`] is the single source of truth at runtime.
//! Durable storage (`access_token` + a serialized snapshot) is a best-effort
//! mirror: written here on every transition, read back only at startup
//! ([`SessionState::restore`]) and by the HTTP wrapper for bearer injection.
//!
//! RACES
//! =====
//! Operations run on the browser event loop, so there is no parallelism,
//! but an in-flight login can resolve after a logout. Every state-changing
//! operation starts by bumping a generation counter and completions carry
//! the generation they started with; stale completions are discarded instead
//! of silently winning.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};
use serde::{Deserialize, Serialize};

use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::{RegisterRequest, User};
use crate::util::storage;
use crate::util::storage::{SESSION_KEY, TOKEN_KEY};

/// Snapshot written to durable storage for optimistic rehydration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: User,
    pub token: String,
    pub authenticated: bool,
}

/// Client-side session.
///
/// Invariant: `authenticated` is true only while both `user` and `token`
/// are present. All transitions below preserve it.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub authenticated: bool,
    /// True only during an in-flight login/registration, never during
    /// passive re-validation.
    pub loading: bool,
    /// True once any auth operation has reached a definitive outcome. The
    /// route guard defers its redirect until then, so a startup whose
    /// durable state is only partially written gets re-validated before
    /// the user is bounced to the login page.
    pub checked: bool,
    generation: u64,
}

impl SessionState {
    /// Rebuild the session from durable storage at startup. The snapshot is
    /// trusted only when the raw token entry agrees with it; `check_auth`
    /// re-derives the real answer from the backend right after.
    pub fn restore() -> Self {
        let snapshot = storage::get(SESSION_KEY)
            .and_then(|raw| serde_json::from_str::<PersistedSession>(&raw).ok());
        let token = storage::get(TOKEN_KEY);
        match (snapshot, token) {
            (Some(snap), Some(token)) if snap.authenticated && snap.token == token => Self {
                user: Some(snap.user),
                token: Some(token),
                authenticated: true,
                loading: false,
                checked: false,
                generation: 0,
            },
            _ => Self::default(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter the Authenticating state and claim a new generation. The
    /// returned value must accompany the matching completion call.
    pub fn begin_auth(&mut self) -> u64 {
        self.loading = true;
        self.generation += 1;
        self.generation
    }

    /// Commit a successful credential exchange: durable write first, then
    /// the in-memory fields. A stale generation is discarded; its durable
    /// token is scrubbed unless a newer operation has already authenticated.
    pub fn commit_auth(&mut self, generation: u64, user: User, token: String) -> bool {
        if generation != self.generation {
            if !self.authenticated {
                storage::remove(TOKEN_KEY);
                storage::remove(SESSION_KEY);
            }
            return false;
        }
        persist(&user, &token);
        self.user = Some(user);
        self.token = Some(token);
        self.authenticated = true;
        self.loading = false;
        self.checked = true;
        true
    }

    /// Leave the Authenticating state after a failed login/registration.
    /// Session state is otherwise untouched: no partial authentication.
    pub fn fail_auth(&mut self, generation: u64) {
        if generation == self.generation {
            self.loading = false;
            self.checked = true;
        }
    }

    /// Logout: scrub durable storage and return to Unauthenticated. Also
    /// invalidates any in-flight operation via the generation bump.
    /// Infallible and idempotent.
    pub fn reset(&mut self) {
        storage::remove(TOKEN_KEY);
        storage::remove(SESSION_KEY);
        self.user = None;
        self.token = None;
        self.authenticated = false;
        self.loading = false;
        self.checked = true;
        self.generation += 1;
    }

    /// Apply the outcome of a passive re-validation. Success repopulates
    /// the session from the profile fetch; a rejected token clears both
    /// layers. Superseded checks are dropped. Never touches `loading`.
    pub fn resolve_check(&mut self, generation: u64, token: String, result: Result<User, ApiError>) {
        if generation != self.generation {
            return;
        }
        match result {
            Ok(user) => {
                persist(&user, &token);
                self.user = Some(user);
                self.token = Some(token);
                self.authenticated = true;
                self.checked = true;
            }
            Err(_) => self.reset(),
        }
    }
}

fn persist(user: &User, token: &str) {
    storage::set(TOKEN_KEY, token);
    let snapshot = PersistedSession {
        user: user.clone(),
        token: token.to_owned(),
        authenticated: true,
    };
    if let Ok(raw) = serde_json::to_string(&snapshot) {
        storage::set(SESSION_KEY, &raw);
    }
}

// -------------------------------------------------------------------------
// Operations
// -------------------------------------------------------------------------

/// Log in with email and password. On success the session ends
/// authenticated with the fetched profile; on failure the error is
/// returned for inline display and the session is unchanged.
pub async fn login(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let mut generation = 0;
    session.update(|s| generation = s.begin_auth());
    authenticate(session, generation, email, password).await
}

/// Create an account, then perform the same credential exchange as
/// [`login`], so a successful registration always ends authenticated.
pub async fn register(
    session: RwSignal<SessionState>,
    data: RegisterRequest,
) -> Result<(), ApiError> {
    let mut generation = 0;
    session.update(|s| generation = s.begin_auth());
    if let Err(e) = api::register(&data).await {
        session.update(|s| s.fail_auth(generation));
        return Err(e);
    }
    authenticate(session, generation, &data.email, &data.password).await
}

/// Shared credential exchange: token first, then the profile fetch that
/// the bearer token authorizes.
async fn authenticate(
    session: RwSignal<SessionState>,
    generation: u64,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let token = match api::login(email, password).await {
        Ok(resp) => resp.access_token,
        Err(e) => {
            session.update(|s| s.fail_auth(generation));
            return Err(e);
        }
    };

    // Durable write before the profile fetch so the request carries the
    // fresh bearer token.
    storage::set(TOKEN_KEY, &token);

    match api::fetch_current_user().await {
        Ok(user) => {
            session.update(|s| {
                s.commit_auth(generation, user, token.clone());
            });
            Ok(())
        }
        Err(e) => {
            storage::remove(TOKEN_KEY);
            session.update(|s| s.fail_auth(generation));
            Err(e)
        }
    }
}

/// Log out. Synchronous and infallible.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(SessionState::reset);
}

/// Startup / passive re-validation. Absorbs every failure into state and
/// never surfaces an error to the caller.
pub async fn check_auth(session: RwSignal<SessionState>) {
    let Some(token) = storage::get(TOKEN_KEY) else {
        session.update(|s| {
            if s.authenticated {
                s.reset();
            }
            s.checked = true;
        });
        return;
    };
    let generation = session.with_untracked(SessionState::generation);
    let result = api::fetch_current_user().await;
    session.update(|s| s.resolve_check(generation, token, result));
}

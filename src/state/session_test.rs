use super::*;
use crate::net::types::UserRole;

fn user(id: i64) -> User {
    User {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        full_name: format!("User {id}"),
        role: UserRole::Student,
        school_id: Some(1),
        points: 120,
        level: 2,
        profile_photo: None,
        created_at: None,
    }
}

fn assert_invariant(state: &SessionState) {
    if state.authenticated {
        assert!(state.user.is_some() && state.token.is_some());
    }
}

// =============================================================
// Initial state and begin/commit/fail transitions
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.authenticated);
    assert!(!state.loading);
    assert!(!state.checked);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn begin_auth_sets_loading_and_bumps_generation() {
    let mut state = SessionState::default();
    let before = state.generation();
    let generation = state.begin_auth();
    assert!(state.loading);
    assert_eq!(generation, before + 1);
}

#[test]
fn commit_auth_authenticates_and_persists() {
    let mut state = SessionState::default();
    let generation = state.begin_auth();
    assert!(state.commit_auth(generation, user(1), "abc".to_owned()));

    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(1));
    assert_invariant(&state);

    assert_eq!(storage::get(TOKEN_KEY), Some("abc".to_owned()));
    assert!(storage::get(SESSION_KEY).is_some());
}

#[test]
fn fail_auth_clears_loading_and_nothing_else() {
    let mut state = SessionState::default();
    let generation = state.begin_auth();
    state.fail_auth(generation);

    assert!(!state.loading);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert_eq!(storage::get(TOKEN_KEY), None);
}

#[test]
fn failed_login_does_not_disturb_existing_session() {
    let mut state = SessionState::default();
    let generation = state.begin_auth();
    assert!(state.commit_auth(generation, user(1), "abc".to_owned()));

    // A later attempt fails mid-flight.
    let retry = state.begin_auth();
    state.fail_auth(retry);

    assert!(state.authenticated);
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert!(!state.loading);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn reset_clears_state_and_storage() {
    let mut state = SessionState::default();
    let generation = state.begin_auth();
    assert!(state.commit_auth(generation, user(1), "abc".to_owned()));

    state.reset();

    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert_eq!(storage::get(TOKEN_KEY), None);
    assert_eq!(storage::get(SESSION_KEY), None);
}

#[test]
fn reset_is_idempotent() {
    let mut state = SessionState::default();
    state.reset();
    state.reset();
    assert!(!state.authenticated);
    assert!(!state.loading);
}

// =============================================================
// Stale completions (generation counter)
// =============================================================

#[test]
fn stale_commit_after_logout_is_discarded() {
    let mut state = SessionState::default();
    let generation = state.begin_auth();

    // Logout lands while the login is still in flight.
    state.reset();

    assert!(!state.commit_auth(generation, user(1), "abc".to_owned()));
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert_eq!(storage::get(TOKEN_KEY), None);
    assert_eq!(storage::get(SESSION_KEY), None);
}

#[test]
fn stale_commit_does_not_scrub_a_newer_session() {
    let mut state = SessionState::default();
    let first = state.begin_auth();
    let second = state.begin_auth();
    assert!(state.commit_auth(second, user(2), "fresh".to_owned()));

    // The first attempt resolves late and must not win or scrub.
    assert!(!state.commit_auth(first, user(1), "stale".to_owned()));

    assert_eq!(state.token.as_deref(), Some("fresh"));
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(2));
    assert_eq!(storage::get(TOKEN_KEY), Some("fresh".to_owned()));
}

#[test]
fn stale_fail_does_not_clear_loading_of_newer_attempt() {
    let mut state = SessionState::default();
    let first = state.begin_auth();
    let _second = state.begin_auth();

    state.fail_auth(first);
    assert!(state.loading);
}

// =============================================================
// Rehydration round trip
// =============================================================

#[test]
fn restore_reproduces_a_committed_session() {
    let mut state = SessionState::default();
    let generation = state.begin_auth();
    assert!(state.commit_auth(generation, user(7), "abc".to_owned()));

    // Simulated restart: rebuild purely from durable storage.
    let restored = SessionState::restore();
    assert!(restored.authenticated);
    assert!(!restored.loading);
    assert_eq!(restored.token.as_deref(), Some("abc"));
    assert_eq!(restored.user.as_ref().map(|u| u.id), Some(7));
    assert_invariant(&restored);
}

#[test]
fn restore_without_stored_session_is_unauthenticated() {
    let restored = SessionState::restore();
    assert!(!restored.authenticated);
    assert!(restored.user.is_none());
}

#[test]
fn restore_rejects_snapshot_with_mismatched_token() {
    let mut state = SessionState::default();
    let generation = state.begin_auth();
    assert!(state.commit_auth(generation, user(1), "abc".to_owned()));

    // The two layers disagree: token entry rewritten out from under the blob.
    storage::set(TOKEN_KEY, "other");

    let restored = SessionState::restore();
    assert!(!restored.authenticated);
}

#[test]
fn restore_rejects_snapshot_without_token_entry() {
    let mut state = SessionState::default();
    let generation = state.begin_auth();
    assert!(state.commit_auth(generation, user(1), "abc".to_owned()));
    storage::remove(TOKEN_KEY);

    let restored = SessionState::restore();
    assert!(!restored.authenticated);
}

// =============================================================
// Startup verdict (`checked`)
// =============================================================

#[test]
fn interrupted_snapshot_write_recovers_via_startup_check() {
    // Token persisted but the snapshot write never landed. Restore must not
    // pretend to a verdict; re-validation then recovers the session.
    storage::set(TOKEN_KEY, "abc");

    let mut restored = SessionState::restore();
    assert!(!restored.authenticated);
    assert!(!restored.checked);

    let generation = restored.generation();
    restored.resolve_check(generation, "abc".to_owned(), Ok(user(4)));

    assert!(restored.authenticated);
    assert!(restored.checked);
    assert_invariant(&restored);
}

#[test]
fn every_definitive_outcome_marks_the_session_checked() {
    let mut state = SessionState::default();
    let generation = state.begin_auth();
    state.fail_auth(generation);
    assert!(state.checked);

    let mut state = SessionState::default();
    let generation = state.begin_auth();
    assert!(state.commit_auth(generation, user(1), "abc".to_owned()));
    assert!(state.checked);

    let mut state = SessionState::default();
    state.reset();
    assert!(state.checked);
}

// =============================================================
// Passive re-validation
// =============================================================

#[test]
fn resolve_check_success_populates_session() {
    let mut state = SessionState::default();
    let generation = state.generation();

    state.resolve_check(generation, "abc".to_owned(), Ok(user(3)));

    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_eq!(storage::get(TOKEN_KEY), Some("abc".to_owned()));
    assert_invariant(&state);
}

#[test]
fn resolve_check_rejected_token_clears_everything() {
    let mut state = SessionState::default();
    let generation = state.begin_auth();
    assert!(state.commit_auth(generation, user(1), "expired".to_owned()));

    state.resolve_check(
        state.generation(),
        "expired".to_owned(),
        Err(ApiError::Unauthorized { detail: None }),
    );

    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert_eq!(storage::get(TOKEN_KEY), None);
    assert_eq!(storage::get(SESSION_KEY), None);
}

#[test]
fn resolve_check_with_stale_generation_is_ignored() {
    let mut state = SessionState::default();
    let stale = state.generation();
    let generation = state.begin_auth();
    assert!(state.commit_auth(generation, user(1), "abc".to_owned()));

    state.resolve_check(stale, "old".to_owned(), Err(ApiError::Timeout));

    assert!(state.authenticated);
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_eq!(storage::get(TOKEN_KEY), Some("abc".to_owned()));
}

use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_light_mode() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_nav_closed() {
    let state = UiState::default();
    assert!(!state.nav_open);
}

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: dark mode and the mobile navigation drawer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_open: bool,
}

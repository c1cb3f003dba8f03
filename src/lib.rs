//! # nird-client
//!
//! Leptos + WASM frontend for NIRD, the gamified e-waste education
//! platform: students complete recycling missions, earn points, climb the
//! team leaderboard, and discuss in the forum.
//!
//! This crate contains pages, components, application state, the REST
//! client, and the session store that owns the bearer-token lifecycle.
//! It talks to the NIRD backend over its REST API and ships no server of
//! its own.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(App);
}

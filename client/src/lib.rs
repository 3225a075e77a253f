//! # client
//!
//! Leptos + WASM frontend for the Udaipur city companion.
//!
//! This crate contains the pages, components, static city content, the
//! browser runtime, and the Firestore feedback store. All decision logic
//! (login gate, tabs, mood, feedback submission) lives in the `sheher` crate;
//! components only read `AppState` from context and call `Shell` transitions.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

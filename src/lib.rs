//! # bookreview-client
//!
//! Leptos + WASM frontend for the book-review publishing application.
//!
//! This crate contains pages, components, application state, the typed REST
//! client, and the avatar upload pipeline. Account/session state lives in a
//! context-provided [`state::auth::AuthState`] signal and is mirrored to
//! browser localStorage through a small storage port.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic reporting, wire up console logging, and
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

//! # tracker-ui
//!
//! Leptos + WASM authentication frontend for the tracker backend: a
//! login/registration form, a process-wide session store persisted to
//! `localStorage`, and client-side routing that gates the account area.
//!
//! The session store ([`state::session`]) is the single source of truth
//! for authentication state; the route guard ([`guard`]) is a pure
//! function of path and session that every page re-evaluates on
//! navigation.

pub mod app;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and console logging, then
/// hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! # client
//!
//! Leptos + WASM frontend for the session-gated demo app.
//!
//! The crate holds the app shell and routes, the session-state provider that
//! owns the bearer token in `sessionStorage`, the guard that validates that
//! token against the backend before a private page renders, the navbar, and
//! the login/register pages. The `server` crate renders it with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

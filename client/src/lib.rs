//! # client
//!
//! Leptos + WASM frontend for the Casablanca watchlist: sign up, log in,
//! search companies, keep a watchlist, and read the latest regulatory
//! disclosures for watched companies.
//!
//! The crate builds twice: with `ssr` for the host's server-side render and
//! with `hydrate` for the browser bundle. Browser-only behavior (storage,
//! HTTP, timers) sits behind `#[cfg(feature = "hydrate")]`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! # rtclock-client
//!
//! Leptos + WASM frontend for RTClock: a live clock shifted by a chosen GMT
//! offset, with a persisted light/dark theme.
//!
//! The crate builds twice: with `ssr` for the host's server render and with
//! `hydrate` for the browser bundle. Browser-only code sits behind the
//! `hydrate` feature and compiles to no-ops otherwise, which is also how the
//! unit tests run.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

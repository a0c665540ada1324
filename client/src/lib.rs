//! # client
//!
//! Leptos + WASM frontend for the NologyNav trip summary form.
//!
//! The crate holds the trip page, its two leaf components, the reducer
//! state behind them, and the `/get_summary` wire types. The host binary
//! renders it with the `ssr` feature; the browser bundle hydrates it with
//! the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

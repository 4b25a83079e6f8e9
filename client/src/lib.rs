//! # client
//!
//! Leptos + WASM frontend for the interactive design portfolio.
//!
//! Pages, shared chrome, the design assistant and the simulated presence
//! indicator live here. The `server` crate renders the shell with the `ssr`
//! feature; the `hydrate` feature builds the browser bundle.

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}

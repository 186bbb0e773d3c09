//! # client
//!
//! Leptos + WASM frontend for the knowledge bank dashboard.
//!
//! This crate contains the static data tables, view state, pages and
//! components. Build it for the browser with the `csr` feature (Trunk does
//! this through `index.html`); native builds compile the same code for tests.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic + console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("knowledge bank starting");
    leptos::mount::mount_to_body(app::App);
}

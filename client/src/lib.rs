//! # client
//!
//! Leptos + WASM front end for the saved-links page. Records live in
//! `window.localStorage` through the `links` store; this crate supplies the
//! browser storage, confirmation and presenter seams plus the page UI.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    leptos::mount::mount_to_body(app::App);
}

//! # selo-client
//!
//! Leptos + WASM frontend for the Selo FIEA certification portal.
//!
//! This crate contains the route table, pages, form components, page/form
//! state, and the simulated API backed by fixture data. The root `selo`
//! binary server-renders it; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

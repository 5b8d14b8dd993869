//! # bookbazaar-client
//!
//! Leptos + WASM frontend for the BookBazaar student book exchange.
//!
//! This crate contains the pages, components, view state and network helpers
//! for the community message board, the site navbar and the home page. It is
//! server-rendered by `bookbazaar-server` (feature `ssr`) and hydrated in the
//! browser (feature `hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating bookbazaar client");
    leptos::mount::hydrate_body(app::App);
}

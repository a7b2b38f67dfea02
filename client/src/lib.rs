//! # client
//!
//! Leptos + WASM frontend for the Fixity civic risk platform.
//!
//! This crate contains the routing shell, pages, components, shared auth and
//! theme state, and the typed REST client for the Fixity backend. The `ssr`
//! feature builds it into the host server for server rendering; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the reactive runtime to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

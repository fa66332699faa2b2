//! # client
//!
//! Leptos + WASM frontend for the Dr. JI Dental website.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and browser utilities. The `server` crate renders it with the
//! `ssr` feature; `cargo leptos` builds the `hydrate` side into WASM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating with API base {}", net::api::api_base());
    leptos::mount::hydrate_body(app::App);
}

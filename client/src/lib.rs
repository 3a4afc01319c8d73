//! # client
//!
//! Leptos + WASM storefront frontend.
//!
//! This crate contains pages, components, the session and login-flow state,
//! the same-origin auth gateway, and the route guard. The `nextmart` host
//! renders it server-side (`ssr`) and the browser bundle hydrates it
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::PublicConfig::from_document();
    leptos::mount::hydrate_body(move || {
        leptos::prelude::provide_context(config);
        app::App()
    });
}

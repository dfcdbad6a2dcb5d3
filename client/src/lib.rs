//! # client
//!
//! Leptos + WASM front-end for the blog. Renders the navigation shell, the
//! post list/detail views, the post-creation form, and the login-gated stats
//! page. All data comes from the remote blog API through the `BlogApi`
//! interface in [`net::api`].
//!
//! The `hydrate` feature builds the browser bundle; the `ssr` feature is
//! enabled by the host binary for server rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

//! # portfolio-client
//!
//! Leptos + WASM frontend for a single-page personal portfolio site.
//! Replaces the hand-written DOM scripting of the static page with a
//! Rust-native UI layer.
//!
//! This crate contains the page, its section components, shared UI state,
//! and the browser glue for theme persistence, smooth in-page scrolling,
//! viewport-reveal animations, and scroll coalescing.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

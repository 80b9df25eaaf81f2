//! # erms-client
//!
//! Leptos + WASM browser layer for the ERMS web application. Replaces the
//! hand-written per-page scripts with a Rust-native module.
//!
//! The crate carries the theme preference controller: it restores a persisted
//! light/dark choice when a page loads and flips it from the page's toggle
//! control. Server-rendered pages are enhanced in place via [`util::theme`];
//! client-rendered pages embed the [`components::theme_toggle::ThemeToggle`]
//! component instead.

pub mod components;
pub mod util;

/// WASM entry point: set up logging and wire page-level behavior.
///
/// Module scripts execute after document parsing, so the DOM is ready by the
/// time this runs.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    util::theme::init();
}

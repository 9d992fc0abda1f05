//! # client
//!
//! Browser side of the three-state theme toggle. Binds the `theme` crate's
//! controller to `localStorage`, `matchMedia`, and the DOM.
//!
//! Two ways in:
//! - static pages load the WASM bundle and call [`init_theme_toggle`], which
//!   enhances an existing `#theme-toggle` button ([`page::attach`]);
//! - Leptos apps render [`components::theme_toggle::ThemeToggle`].

pub mod components;
pub mod config;
pub mod page;
pub mod util;

pub use config::ToggleConfig;

/// WASM entry for static pages: logging, panic hook, then [`page::attach`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_theme_toggle() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
    page::attach(&ToggleConfig::default());
}

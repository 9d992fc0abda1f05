//! Static-page entry: enhance an existing `#theme-toggle` button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page ships plain markup and loads this crate as a WASM module.
//! `attach` finds the control, renders the resolved theme, and binds the two
//! event sources (click, OS scheme change) to one shared controller.

use crate::config::ToggleConfig;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use theme::ThemeController;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::util::{dom::DomView, media, media::MediaQuerySystem, storage::LocalStorageStore};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Wire the toggle control described by `config`.
///
/// Returns `false` (after logging a warning) when the control is missing;
/// nothing on the page is touched in that case.
pub fn attach(config: &ToggleConfig) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(view) = DomView::find(config) else {
            log::warn!("#{} not found; theme toggle disabled", config.element_id);
            return false;
        };
        let toggle = view.toggle().clone();

        let controller = Rc::new(RefCell::new(ThemeController::new(
            LocalStorageStore::new(config.storage_key.clone()),
            MediaQuerySystem::new(),
            view,
        )));
        let initial = controller.borrow_mut().start();
        log::info!("theme toggle attached: {initial:?}");

        let on_click = {
            let controller = Rc::clone(&controller);
            Closure::wrap(Box::new(move |_ev: web_sys::Event| {
                let state = controller.borrow_mut().on_toggle_click();
                log::debug!("theme toggled: {state:?}");
            }) as Box<dyn FnMut(web_sys::Event)>)
        };
        if let Err(e) = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::warn!("failed to bind theme toggle click: {e:?}");
            return false;
        }
        on_click.forget();

        let system_watch = media::watch(move |pref| {
            if let Some(state) = controller.borrow_mut().on_system_change(pref) {
                log::debug!("system theme followed: {state:?}");
            }
        });
        if let Some(system_watch) = system_watch {
            system_watch.keep();
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::warn!("#{} not bound: no browser document", config.element_id);
        false
    }
}

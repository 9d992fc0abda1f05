//! Reactive theme toggle button for Leptos apps.
//!
//! SYSTEM CONTEXT
//! ==============
//! Same controller as the static-page entry, but the control is rendered by
//! Leptos: the view writes into a signal and the button reads from it.

use leptos::prelude::*;
use theme::view::MOON_ICON_SVG;
use theme::{ThemeState, ThemeView, ToggleView};

use crate::config::ToggleConfig;
use crate::util::dom;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use theme::ThemeController;

#[cfg(feature = "hydrate")]
use crate::util::{
    media,
    media::{MediaQuerySystem, MediaWatch},
    storage::LocalStorageStore,
};

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// `ThemeView` that publishes each render to a signal and the page attribute.
#[derive(Clone, Debug)]
pub struct SignalView {
    rendered: RwSignal<ToggleView>,
    theme_attribute: String,
}

impl SignalView {
    pub fn new(rendered: RwSignal<ToggleView>, theme_attribute: impl Into<String>) -> Self {
        Self { rendered, theme_attribute: theme_attribute.into() }
    }
}

impl ThemeView for SignalView {
    fn apply(&mut self, view: &ToggleView) {
        dom::set_theme_attribute(&self.theme_attribute, view.theme());
        self.rendered.set(view.clone());
    }
}

#[cfg(feature = "hydrate")]
type SignalController = ThemeController<LocalStorageStore, MediaQuerySystem, SignalView>;

/// Three-state theme toggle (system / light / dark).
///
/// Reads a [`ToggleConfig`] from context when one is provided.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let config = use_context::<ToggleConfig>().unwrap_or_default();
    let rendered = RwSignal::new(ToggleView::from_state(ThemeState::default()));

    #[cfg(feature = "hydrate")]
    let controller = Rc::new(RefCell::new(None::<SignalController>));
    #[cfg(feature = "hydrate")]
    let system_watch = StoredValue::new_local(None::<MediaWatch>);

    #[cfg(feature = "hydrate")]
    {
        let controller = Rc::clone(&controller);
        let config = config.clone();
        Effect::new(move || {
            if controller.borrow().is_some() {
                return;
            }
            let mut instance = ThemeController::new(
                LocalStorageStore::new(config.storage_key.clone()),
                MediaQuerySystem::new(),
                SignalView::new(rendered, config.theme_attribute.clone()),
            );
            instance.start();
            *controller.borrow_mut() = Some(instance);

            let watched = Rc::clone(&controller);
            system_watch.set_value(media::watch(move |pref| {
                if let Some(instance) = watched.borrow_mut().as_mut() {
                    instance.on_system_change(pref);
                }
            }));
        });

        // Dropping the watch unregisters the listener and releases the controller.
        on_cleanup(move || system_watch.set_value(None));
    }

    let on_click = {
        #[cfg(feature = "hydrate")]
        {
            let controller = Rc::clone(&controller);
            move |_ev: leptos::ev::MouseEvent| {
                if let Some(instance) = controller.borrow_mut().as_mut() {
                    let state = instance.on_toggle_click();
                    log::debug!("theme toggled: {state:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <button
            id=config.element_id
            class="btn theme-toggle"
            class:pressed=move || rendered.with(ToggleView::pressed)
            class:raised=move || !rendered.with(ToggleView::pressed)
            title=move || rendered.with(|v| v.tooltip.clone())
            style:opacity=move || rendered.with(ToggleView::opacity)
            aria-pressed=move || if rendered.with(ToggleView::pressed) { "true" } else { "false" }
            inner_html=MOON_ICON_SVG
            on:click=on_click
        ></button>
    }
}

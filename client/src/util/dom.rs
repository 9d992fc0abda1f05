//! DOM side of the toggle: theme attribute on `<body>` and the control itself.
//!
//! TRADE-OFFS
//! ==========
//! Attribute and style writes are best-effort; a rejected write is logged and
//! leaves the previous value in place rather than aborting the event handler.

use theme::{ThemeView, ToggleView};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

use crate::config::ToggleConfig;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("failed to set {what}: {e:?}");
    }
}

/// Set the theme attribute on `<body>`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn set_theme_attribute(name: &str, theme: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            warn_on_err(name, body.set_attribute(name, theme));
        }
    }
}

/// Renders onto a toggle element found by id on a static page.
pub struct DomView {
    theme_attribute: String,
    #[cfg(feature = "hydrate")]
    toggle: web_sys::HtmlElement,
}

impl DomView {
    /// Look up the toggle control. `None` when it is absent from the page.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    pub fn find(config: &ToggleConfig) -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let element = web_sys::window()?.document()?.get_element_by_id(&config.element_id)?;
            let Ok(toggle) = element.dyn_into::<web_sys::HtmlElement>() else {
                log::warn!("#{} is not an HTML element", config.element_id);
                return None;
            };
            Some(Self { theme_attribute: config.theme_attribute.clone(), toggle })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[must_use]
    pub fn theme_attribute(&self) -> &str {
        &self.theme_attribute
    }

    /// The bound control, for attaching listeners.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn toggle(&self) -> &web_sys::HtmlElement {
        &self.toggle
    }
}

impl ThemeView for DomView {
    fn apply(&mut self, view: &ToggleView) {
        set_theme_attribute(&self.theme_attribute, view.theme());

        #[cfg(feature = "hydrate")]
        {
            self.toggle.set_inner_html(view.icon());
            self.toggle.set_title(&view.tooltip);
            warn_on_err("opacity", self.toggle.style().set_property("opacity", view.opacity()));
            warn_on_err(
                "aria-pressed",
                self.toggle
                    .set_attribute("aria-pressed", if view.pressed() { "true" } else { "false" }),
            );

            let (add, remove) = view.emphasis();
            let classes = self.toggle.class_list();
            warn_on_err("emphasis class", classes.add_1(add));
            warn_on_err("emphasis class", classes.remove_1(remove));
        }
    }
}

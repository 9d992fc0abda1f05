//! Presentation of a resolved theme on the page.
//!
//! `ToggleView` holds every value the DOM layer writes, so the browser side
//! only copies fields and never decides anything.

use crate::preference::{Preference, ThemeState};

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Crescent moon drawn inside the toggle button.
pub const MOON_ICON_SVG: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor" class="moon-icon"><path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/></svg>"#;

pub const PRESSED_CLASS: &str = "pressed";
pub const RAISED_CLASS: &str = "raised";

/// Opacity of the control while following the system.
pub const AUTO_OPACITY: &str = "0.7";
pub const MANUAL_OPACITY: &str = "1";

/// Everything `render` writes for one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleView {
    pub state: ThemeState,
    pub tooltip: String,
}

impl ToggleView {
    #[must_use]
    pub fn from_state(state: ThemeState) -> Self {
        let pref = state.preference;
        let tooltip = if state.is_auto() {
            format!("Auto ({pref} mode) - Click to override")
        } else {
            format!("Switch to {} mode", pref.opposite())
        };
        Self { state, tooltip }
    }

    /// Value of the page's theme attribute.
    #[must_use]
    pub fn theme(&self) -> &'static str {
        self.state.preference.as_str()
    }

    /// Pressed iff dark.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.state.preference == Preference::Dark
    }

    /// Dimmed while following the system.
    #[must_use]
    pub fn dimmed(&self) -> bool {
        self.state.is_auto()
    }

    #[must_use]
    pub fn opacity(&self) -> &'static str {
        if self.dimmed() { AUTO_OPACITY } else { MANUAL_OPACITY }
    }

    /// Emphasis class to add and the one to remove.
    #[must_use]
    pub fn emphasis(&self) -> (&'static str, &'static str) {
        if self.pressed() {
            (PRESSED_CLASS, RAISED_CLASS)
        } else {
            (RAISED_CLASS, PRESSED_CLASS)
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        MOON_ICON_SVG
    }
}

/// Sink for rendered state (the DOM in the browser).
pub trait ThemeView {
    fn apply(&mut self, view: &ToggleView);
}

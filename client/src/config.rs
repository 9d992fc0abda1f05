//! Page wiring configuration for the theme toggle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ELEMENT_ID: &str = "theme-toggle";
pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";

/// Element id, storage key, and attribute name the toggle binds to.
///
/// Provide one through Leptos context to override the defaults for
/// [`crate::components::theme_toggle::ThemeToggle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleConfig {
    /// `id` of the toggle control on a static page.
    pub element_id: String,
    /// `localStorage` key holding the override.
    pub storage_key: String,
    /// Attribute set on `<body>` to the active theme.
    pub theme_attribute: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
        }
    }
}

impl ToggleConfig {
    #[must_use]
    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = id.into();
        self
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_theme_attribute(mut self, name: impl Into<String>) -> Self {
        self.theme_attribute = name.into();
        self
    }
}

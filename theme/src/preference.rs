//! Preference and mode model.
//!
//! DESIGN
//! ======
//! `ThemeState` is never persisted. Only the optional override is stored;
//! the mode is implied by whether it is present.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Error returned when parsing a [`Preference`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The value is neither `"light"` nor `"dark"`.
    #[error("invalid theme preference: {0:?}")]
    InvalidPreference(String),
}

/// A concrete colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Light,
    Dark,
}

impl Preference {
    /// Storage and DOM attribute form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map a `prefers-color-scheme: dark` match result to a preference.
    #[must_use]
    pub fn from_dark_match(matches: bool) -> Self {
        if matches { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidPreference(other.to_owned())),
        }
    }
}

/// Where the displayed preference comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Follow the OS colour scheme.
    #[default]
    Auto,
    /// Pinned by a persisted user override.
    Manual,
}

/// Resolved theme: what to show and why.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub preference: Preference,
    pub mode: Mode,
}

impl ThemeState {
    #[must_use]
    pub fn auto(preference: Preference) -> Self {
        Self { preference, mode: Mode::Auto }
    }

    #[must_use]
    pub fn manual(preference: Preference) -> Self {
        Self { preference, mode: Mode::Manual }
    }

    /// Resolve from the persisted override and the OS preference.
    ///
    /// An override always wins; without one the state follows the system.
    #[must_use]
    pub fn resolve(stored: Option<Preference>, system: Preference) -> Self {
        match stored {
            Some(pref) => Self::manual(pref),
            None => Self::auto(system),
        }
    }

    #[must_use]
    pub fn is_auto(self) -> bool {
        self.mode == Mode::Auto
    }
}

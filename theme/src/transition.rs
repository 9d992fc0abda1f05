//! Click transition table.

use crate::preference::Preference;

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

/// What a toggle click does to the persisted override.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Store this override (Manual mode).
    Set(Preference),
    /// Remove the override (Auto mode).
    Clear,
}

/// Decide the next override from the current override, the OS preference,
/// and the preference currently shown on the page.
///
/// | override | vs system | result |
/// |----------|-----------|--------|
/// | none | | `Set(opposite(system))` |
/// | some | equal | `Clear` |
/// | some | differs | `opposite(displayed)`: `Clear` if it equals system, else `Set` |
#[must_use]
pub fn next_override(current: Option<Preference>, system: Preference, displayed: Preference) -> Transition {
    match current {
        None => Transition::Set(system.opposite()),
        Some(pref) if pref == system => Transition::Clear,
        Some(_) => {
            let next = displayed.opposite();
            if next == system { Transition::Clear } else { Transition::Set(next) }
        }
    }
}

//! Theme controller: resolves, renders, and reacts to the two page events.
//!
//! DESIGN
//! ======
//! The controller owns its three collaborators (store, system query, view)
//! as explicit context. It never caches the override; every handler reads
//! the store first so another tab's write is honoured on the next event.
//!
//! Storage failures never surface as errors. A failed read is treated as
//! "no override". After every click the controller renders what the store
//! resolves to on read-back, so a store that cannot be read shows the system
//! theme no matter whether its writes succeed.

use crate::preference::{Preference, ThemeState};
use crate::store::{OverrideStore, SystemScheme};
use crate::transition::{Transition, next_override};
use crate::view::{ThemeView, ToggleView};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, Q, V> {
    store: S,
    system: Q,
    view: V,
    displayed: Option<Preference>,
}

impl<S, Q, V> ThemeController<S, Q, V>
where
    S: OverrideStore,
    Q: SystemScheme,
    V: ThemeView,
{
    pub fn new(store: S, system: Q, view: V) -> Self {
        Self { store, system, view, displayed: None }
    }

    /// Initial resolve + render at page load.
    pub fn start(&mut self) -> ThemeState {
        let state = self.resolve_state();
        log::debug!("theme start: {state:?}");
        self.render(state);
        state
    }

    /// Current state from the persisted override and the OS preference.
    pub fn resolve_state(&self) -> ThemeState {
        ThemeState::resolve(self.stored_override(), self.system.preference())
    }

    /// Push `state` to the view and remember it as the displayed value.
    pub fn render(&mut self, state: ThemeState) {
        let view = ToggleView::from_state(state);
        self.view.apply(&view);
        self.displayed = Some(state.preference);
    }

    /// OS colour scheme changed.
    ///
    /// Returns the new state when it was rendered, `None` when an override
    /// pins the theme and nothing changed on the page.
    pub fn on_system_change(&mut self, pref: Preference) -> Option<ThemeState> {
        if let Some(pinned) = self.stored_override() {
            log::debug!("system theme now {pref}, override {pinned} kept");
            return None;
        }
        let state = ThemeState::auto(pref);
        self.render(state);
        Some(state)
    }

    /// Toggle control activated.
    pub fn on_toggle_click(&mut self) -> ThemeState {
        let system = self.system.preference();
        let current = self.stored_override();
        let displayed = self
            .displayed
            .unwrap_or_else(|| ThemeState::resolve(current, system).preference);

        let persisted = match next_override(current, system, displayed) {
            Transition::Set(pref) => self.store.save(pref),
            Transition::Clear => self.store.clear(),
        };
        if let Err(e) = persisted {
            log::warn!("theme override not persisted: {e}");
        }

        // Render what the store reads back, not what was requested, so an
        // unreadable store stays on the system theme.
        let state = self.resolve_state();
        self.render(state);
        state
    }

    /// Preference most recently rendered, if any.
    #[must_use]
    pub fn displayed(&self) -> Option<Preference> {
        self.displayed
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn stored_override(&self) -> Option<Preference> {
        match self.store.load() {
            Ok(pref) => pref,
            Err(e) => {
                log::warn!("theme override unreadable, following system: {e}");
                None
            }
        }
    }
}

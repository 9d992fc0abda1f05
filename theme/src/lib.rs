//! Three-state theme toggle: follow the system, or pin light / dark.
//!
//! This crate owns everything about the toggle that does not touch the
//! browser: the preference model, the click transition table, the computed
//! presentation of each state, and the controller that ties them together.
//! Browser bindings live in the `client` crate and plug in through the
//! [`store::OverrideStore`], [`store::SystemScheme`] and [`view::ThemeView`]
//! traits.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`preference`] | `Preference`, `Mode`, `ThemeState` and parsing errors |
//! | [`store`] | Persistence and OS-signal traits, storage errors |
//! | [`transition`] | Pure click transition table |
//! | [`view`] | Presentation computed from a `ThemeState` |
//! | [`controller`] | `ThemeController` event handlers |

pub mod controller;
pub mod preference;
pub mod store;
pub mod transition;
pub mod view;

pub use controller::ThemeController;
pub use preference::{Mode, Preference, ThemeError, ThemeState};
pub use store::{OverrideStore, StorageError, SystemScheme};
pub use transition::{Transition, next_override};
pub use view::{ThemeView, ToggleView};

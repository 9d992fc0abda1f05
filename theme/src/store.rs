//! External signals the controller reads: persisted override and OS scheme.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser implementations (`localStorage`, `matchMedia`) live in the
//! `client` crate. Keeping the seams here lets the controller run natively
//! in tests with in-memory doubles.

use crate::preference::Preference;

/// Error returned by an [`OverrideStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend (storage disabled, private mode, non-browser build).
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Persisted user override. Absence means Auto mode.
pub trait OverrideStore {
    /// Read the stored override.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read. Unparseable
    /// stored values are reported as `Ok(None)` by implementations.
    fn load(&self) -> Result<Option<Preference>, StorageError>;

    /// Persist `pref` as the override.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn save(&mut self, pref: Preference) -> Result<(), StorageError>;

    /// Remove the override, returning to Auto mode.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the removal.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// OS-level colour scheme query.
pub trait SystemScheme {
    fn preference(&self) -> Preference;
}

impl<F> SystemScheme for F
where
    F: Fn() -> Preference,
{
    fn preference(&self) -> Preference {
        self()
    }
}

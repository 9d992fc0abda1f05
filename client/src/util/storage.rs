//! `localStorage`-backed theme override.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only. Without `hydrate` the store reports itself unavailable, which
//! the controller treats the same as disabled storage: Auto mode only.

use theme::{OverrideStore, Preference, StorageError};

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Override persisted under one `localStorage` key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Parse a stored value; anything but `light`/`dark` counts as no override.
pub fn parse_stored(raw: &str) -> Option<Preference> {
    match raw.parse::<Preference>() {
        Ok(pref) => Some(pref),
        Err(e) => {
            log::warn!("ignoring stored theme: {e}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Read(format!("{e:?}"))),
    }
}

impl OverrideStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Preference>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?
                .get_item(&self.key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))?;
            Ok(raw.as_deref().and_then(parse_stored))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn save(&mut self, pref: Preference) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(&self.key, pref.as_str())
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(&self.key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

//! OS colour scheme via `matchMedia("(prefers-color-scheme: dark)")`.

use theme::{Preference, SystemScheme};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Live OS preference. Reports `Light` when the query is unsupported.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQuerySystem;

impl MediaQuerySystem {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SystemScheme for MediaQuerySystem {
    fn preference(&self) -> Preference {
        Preference::from_dark_match(prefers_dark())
    }
}

#[cfg(feature = "hydrate")]
fn dark_query() -> Option<web_sys::MediaQueryList> {
    match web_sys::window()?.match_media(DARK_SCHEME_QUERY) {
        Ok(mq) => mq,
        Err(e) => {
            log::warn!("matchMedia rejected {DARK_SCHEME_QUERY}: {e:?}");
            None
        }
    }
}

/// Whether the OS currently asks for a dark scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        dark_query().map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Registered `change` listener. Dropping it removes the listener.
pub struct MediaWatch {
    #[cfg(feature = "hydrate")]
    query: web_sys::MediaQueryList,
    #[cfg(feature = "hydrate")]
    callback: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl MediaWatch {
    /// Keep the listener for the rest of the page lifetime.
    pub fn keep(self) {
        std::mem::forget(self);
    }
}

impl Drop for MediaWatch {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = self
                .query
                .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to unwatch system theme: {e:?}");
            }
        }
    }
}

/// Call `on_change` with the new preference whenever the OS scheme flips.
///
/// `None` when no listener could be installed.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn watch<F>(on_change: F) -> Option<MediaWatch>
where
    F: FnMut(Preference) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let Some(query) = dark_query() else {
            log::warn!("matchMedia unavailable; system theme changes ignored");
            return None;
        };
        let mut on_change = on_change;
        let callback = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(Preference::from_dark_match(ev.matches()));
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        if let Err(e) = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            log::warn!("failed to watch system theme: {e:?}");
            return None;
        }
        Some(MediaWatch { query, callback })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

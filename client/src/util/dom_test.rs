#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn find_returns_none_without_a_document() {
    assert!(DomView::find(&ToggleConfig::default()).is_none());
}

#[test]
fn set_theme_attribute_is_noop_but_callable() {
    set_theme_attribute("data-theme", "dark");
    set_theme_attribute("data-theme", "light");
}

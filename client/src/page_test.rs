#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn attach_without_document_is_a_logged_noop() {
    assert!(!attach(&ToggleConfig::default()));
}

#[test]
fn attach_honours_custom_element_id() {
    let config = ToggleConfig::default().with_element_id("missing-control");
    assert!(!attach(&config));
}

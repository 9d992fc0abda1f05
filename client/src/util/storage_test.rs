use super::*;

#[test]
fn parse_stored_accepts_light_and_dark() {
    assert_eq!(parse_stored("light"), Some(Preference::Light));
    assert_eq!(parse_stored("dark"), Some(Preference::Dark));
}

#[test]
fn parse_stored_treats_garbage_as_absent() {
    assert_eq!(parse_stored(""), None);
    assert_eq!(parse_stored("true"), None);
    assert_eq!(parse_stored("DARK"), None);
}

#[test]
fn store_keeps_its_key() {
    let store = LocalStorageStore::new("theme");
    assert_eq!(store.key(), "theme");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn store_is_unavailable_outside_browser() {
    let mut store = LocalStorageStore::new("theme");
    assert_eq!(store.load(), Err(StorageError::Unavailable));
    assert_eq!(store.save(Preference::Dark), Err(StorageError::Unavailable));
    assert_eq!(store.clear(), Err(StorageError::Unavailable));
}

use super::*;

// =============================================================
// Preference
// =============================================================

#[test]
fn preference_opposite_flips() {
    assert_eq!(Preference::Light.opposite(), Preference::Dark);
    assert_eq!(Preference::Dark.opposite(), Preference::Light);
}

#[test]
fn preference_parses_storage_values() {
    assert_eq!("light".parse::<Preference>(), Ok(Preference::Light));
    assert_eq!("dark".parse::<Preference>(), Ok(Preference::Dark));
}

#[test]
fn preference_rejects_unknown_values() {
    let err = "Dark".parse::<Preference>().expect_err("case sensitive");
    assert_eq!(err, ThemeError::InvalidPreference("Dark".to_owned()));
    assert!("".parse::<Preference>().is_err());
    assert!("true".parse::<Preference>().is_err());
}

#[test]
fn preference_display_matches_storage_form() {
    assert_eq!(Preference::Dark.to_string(), "dark");
    assert_eq!(format!("{}", Preference::Light), "light");
}

#[test]
fn preference_serializes_lowercase() {
    let json = serde_json::to_string(&Preference::Dark).unwrap();
    assert_eq!(json, "\"dark\"");
}

#[test]
fn preference_from_dark_match() {
    assert_eq!(Preference::from_dark_match(true), Preference::Dark);
    assert_eq!(Preference::from_dark_match(false), Preference::Light);
}

#[test]
fn theme_error_message_quotes_value() {
    let err = ThemeError::InvalidPreference("blue".to_owned());
    assert_eq!(err.to_string(), "invalid theme preference: \"blue\"");
}

// =============================================================
// ThemeState::resolve
// =============================================================

#[test]
fn resolve_without_override_follows_system() {
    let state = ThemeState::resolve(None, Preference::Dark);
    assert_eq!(state, ThemeState { preference: Preference::Dark, mode: Mode::Auto });
    assert!(state.is_auto());
}

#[test]
fn resolve_with_override_is_manual() {
    let state = ThemeState::resolve(Some(Preference::Light), Preference::Dark);
    assert_eq!(state, ThemeState { preference: Preference::Light, mode: Mode::Manual });
    assert!(!state.is_auto());
}

#[test]
fn resolve_with_override_equal_to_system_is_still_manual() {
    let state = ThemeState::resolve(Some(Preference::Dark), Preference::Dark);
    assert_eq!(state.mode, Mode::Manual);
}

#[test]
fn theme_state_default_is_auto_light() {
    assert_eq!(ThemeState::default(), ThemeState::auto(Preference::Light));
}

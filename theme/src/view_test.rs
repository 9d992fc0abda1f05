use super::*;

#[test]
fn auto_tooltip_names_current_mode() {
    let view = ToggleView::from_state(ThemeState::auto(Preference::Dark));
    assert_eq!(view.tooltip, "Auto (dark mode) - Click to override");
}

#[test]
fn manual_tooltip_offers_opposite() {
    let view = ToggleView::from_state(ThemeState::manual(Preference::Light));
    assert_eq!(view.tooltip, "Switch to dark mode");

    let view = ToggleView::from_state(ThemeState::manual(Preference::Dark));
    assert_eq!(view.tooltip, "Switch to light mode");
}

#[test]
fn dark_is_pressed_light_is_raised() {
    let dark = ToggleView::from_state(ThemeState::manual(Preference::Dark));
    assert!(dark.pressed());
    assert_eq!(dark.emphasis(), (PRESSED_CLASS, RAISED_CLASS));

    let light = ToggleView::from_state(ThemeState::auto(Preference::Light));
    assert!(!light.pressed());
    assert_eq!(light.emphasis(), (RAISED_CLASS, PRESSED_CLASS));
}

#[test]
fn auto_is_dimmed_manual_is_opaque() {
    let auto = ToggleView::from_state(ThemeState::auto(Preference::Light));
    assert!(auto.dimmed());
    assert_eq!(auto.opacity(), "0.7");

    let manual = ToggleView::from_state(ThemeState::manual(Preference::Light));
    assert!(!manual.dimmed());
    assert_eq!(manual.opacity(), "1");
}

#[test]
fn theme_attribute_tracks_preference() {
    assert_eq!(ToggleView::from_state(ThemeState::auto(Preference::Dark)).theme(), "dark");
    assert_eq!(ToggleView::from_state(ThemeState::manual(Preference::Light)).theme(), "light");
}

#[test]
fn icon_is_moon_svg() {
    let view = ToggleView::from_state(ThemeState::default());
    assert!(view.icon().starts_with("<svg"));
    assert!(view.icon().contains("moon-icon"));
}

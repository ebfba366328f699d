#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn toggled_twice_is_identity() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn stored_strings_parse_to_themes() {
    assert_eq!(Theme::from_stored("dark"), Theme::Dark);
    assert_eq!(Theme::from_stored("light"), Theme::Light);
    assert_eq!(Theme::from_stored("solarized"), Theme::Light);
    assert_eq!(Theme::from_stored(""), Theme::Light);
}

#[test]
fn as_str_round_trips_through_from_stored() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(theme.as_str()), theme);
    }
}

#[test]
fn stored_theme_defaults_to_light() {
    assert_eq!(stored_theme(), Theme::Light);
}

#[test]
fn toggle_theme_flips_the_current_value() {
    assert_eq!(toggle_theme(Theme::Light), Theme::Dark);
    assert_eq!(toggle_theme(Theme::Dark), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply_theme(Theme::Light);
    apply_theme(Theme::Dark);
}

use super::*;

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
}

#[test]
fn ui_state_default_navbar_not_scrolled() {
    let state = UiState::default();
    assert!(!state.navbar_scrolled);
}

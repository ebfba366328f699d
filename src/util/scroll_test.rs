#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn target_offset_leaves_room_for_navbar_and_gap() {
    // A section at 500px under an 80px navbar lands at 400px.
    assert_eq!(scroll_target_offset(500.0, 80.0), 400.0);
    assert_eq!(scroll_target_offset(0.0, 0.0), -NAV_SCROLL_GAP_PX);
}

#[test]
fn menu_closes_strictly_above_the_breakpoint() {
    assert!(menu_must_close(769.0));
    assert!(menu_must_close(1440.0));
    assert!(!menu_must_close(768.0));
    assert!(!menu_must_close(767.0));
    assert!(!menu_must_close(320.0));
}

#[test]
fn viewport_width_is_absent_off_browser() {
    assert_eq!(viewport_width(), None);
}

#[test]
fn scroll_to_missing_section_is_noop_but_callable() {
    scroll_to_section("definitely-not-a-section");
    scroll_to_section("");
}

use super::*;

#[test]
fn target_width_passes_inline_width_through() {
    assert_eq!(reveal_target_width("75%"), "75%");
    assert_eq!(reveal_target_width("33%"), "33%");
}

#[test]
fn target_width_defaults_to_full() {
    assert_eq!(reveal_target_width(""), "100%");
}

#[test]
fn card_selector_covers_every_animated_role() {
    for role in [".skill-card", ".experience-card", ".education-card", ".contact-method"] {
        assert!(CARD_SELECTOR.contains(role), "missing {role}");
    }
}

#[test]
fn progress_reveal_waits_before_filling() {
    assert_eq!(PROGRESS_DELAY_MS, 300);
}

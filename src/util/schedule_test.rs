#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn navbar_scrolled_strictly_above_threshold() {
    assert!(!navbar_is_scrolled(0.0));
    assert!(!navbar_is_scrolled(100.0));
    assert!(navbar_is_scrolled(100.5));
    assert!(navbar_is_scrolled(101.0));
    assert!(navbar_is_scrolled(5000.0));
}

#[test]
fn gate_starts_released() {
    let gate = FrameGate::default();
    assert!(!gate.is_pending());
}

#[test]
fn gate_admits_one_update_until_released() {
    let mut gate = FrameGate::default();
    assert!(gate.try_arm());
    assert!(gate.is_pending());

    // A burst of further events schedules nothing.
    assert!(!gate.try_arm());
    assert!(!gate.try_arm());

    gate.release();
    assert!(!gate.is_pending());
    assert!(gate.try_arm());
}

#[test]
fn release_is_idempotent() {
    let mut gate = FrameGate::default();
    gate.release();
    assert!(gate.try_arm());
    gate.release();
    gate.release();
    assert!(gate.try_arm());
}

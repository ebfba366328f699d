//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod email;
pub mod lifecycle;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod theme;

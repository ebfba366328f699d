//! Local UI chrome state (theme, mobile menu, navbar scroll flag).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state for the active theme, the mobile menu, and the navbar's
/// scrolled styling.
///
/// One signal holding this struct drives both the menu and its toggle
/// button, so the two elements can never disagree about the open state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub mobile_menu_open: bool,
    pub navbar_scrolled: bool,
}

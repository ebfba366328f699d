//! Theme preference persistence and application.
//!
//! Reads the visitor's choice from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; non-hydrate paths
//! safely no-op so native tests and server rendering stay deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// The two selectable color themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal string persisted to `localStorage` and mirrored into
    /// the document's `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` is `Light`.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Theme::Dark } else { Theme::Light }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read the stored theme preference.
///
/// Returns [`Theme::Light`] when nothing was persisted or storage is
/// unavailable.
#[must_use]
pub fn stored_theme() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        if let Ok(Some(storage)) = window.local_storage()
            && let Ok(Some(raw)) = storage.get_item(STORAGE_KEY)
        {
            return Theme::from_stored(&raw);
        }
        Theme::Light
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Persist `theme` and set it as the document's `data-theme` attribute.
///
/// Every call is an unconditional overwrite of the stored value. Missing
/// storage or DOM degrades to a silent no-op.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
            if let Some(el) = window.document().and_then(|d| d.document_element()) {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, apply the result, and return it.
pub fn toggle_theme(current: Theme) -> Theme {
    let next = current.toggled();
    apply_theme(next);
    next
}

//! Smooth in-page scrolling shared by the navbar links and hero buttons.
//!
//! One scroll-to-anchor implementation serves every internal link so the
//! offset math stays consistent across entry points.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Gap in CSS pixels left between the navbar and a scrolled-to section.
pub const NAV_SCROLL_GAP_PX: f64 = 20.0;

/// Viewport width in CSS pixels above which the mobile menu never stays
/// open.
pub const MOBILE_MENU_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset for a section, leaving room for the fixed navbar.
#[must_use]
pub fn scroll_target_offset(element_top: f64, navbar_height: f64) -> f64 {
    element_top - navbar_height - NAV_SCROLL_GAP_PX
}

/// Whether the mobile menu must be forced closed at `viewport_width`.
///
/// Desktop layouts never show the mobile menu, so any width strictly above
/// the breakpoint closes it regardless of prior state.
#[must_use]
pub fn menu_must_close(viewport_width: f64) -> bool {
    viewport_width > MOBILE_MENU_BREAKPOINT_PX
}

/// Current viewport width, or `None` outside a browser.
#[must_use]
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Smooth-scroll the viewport to the section with `section_id`.
///
/// A missing section or missing `.navbar` element is normal absence and
/// the call becomes a no-op.
pub fn scroll_to_section(section_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(section) = document.get_element_by_id(section_id) else {
            return;
        };
        let Ok(Some(navbar)) = document.query_selector(".navbar") else {
            return;
        };
        let Ok(section) = section.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let Ok(navbar) = navbar.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        let target = scroll_target_offset(
            f64::from(section.offset_top()),
            f64::from(navbar.offset_height()),
        );

        let options = web_sys::ScrollToOptions::new();
        options.set_top(target);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section_id;
    }
}

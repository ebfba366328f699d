//! Scroll-triggered reveal animations for cards and progress bars.
//!
//! DESIGN
//! ======
//! Reveal scheduling is capability-polymorphic. An observer-backed schedule
//! drives reveals from viewport intersections; without
//! `IntersectionObserver` support, cards stay in their hidden initial state
//! while progress bars animate eagerly instead. Reveals are one-shot: an
//! element that entered the viewport once never re-hides, entries dropping
//! back below the threshold are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

/// Elements given the fade-and-slide reveal treatment.
pub const CARD_SELECTOR: &str = ".skill-card, .experience-card, .education-card, .contact-method";

/// Progress-bar fill elements.
pub const PROGRESS_SELECTOR: &str = ".progress-fill";

/// Visible fraction at which a card reveals.
pub const CARD_THRESHOLD: f64 = 0.1;

/// Bottom margin shrinking the card observation root, so reveals start a
/// little before the element fully clears the fold.
pub const CARD_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Visible fraction at which a progress bar starts filling.
pub const PROGRESS_THRESHOLD: f64 = 0.5;

/// Delay before a visible progress bar animates from zero to its target,
/// giving the width transition a chance to run instead of jumping.
pub const PROGRESS_DELAY_MS: u32 = 300;

#[cfg(feature = "hydrate")]
const TARGET_WIDTH_ATTR: &str = "data-target-width";

/// Fill width a progress bar animates to.
///
/// The target is captured from the bar's inline style before the bar is
/// reset to zero; a bar with no inline width fills completely.
#[must_use]
pub fn reveal_target_width(inline_width: &str) -> String {
    if inline_width.is_empty() {
        "100%".to_owned()
    } else {
        inline_width.to_owned()
    }
}

/// Strategy for scheduling one-shot reveals as elements become visible.
#[cfg(feature = "hydrate")]
trait RevealSchedule {
    /// Register `el` for its reveal. Observer-backed schedules fire the
    /// reveal when the element crosses the visibility threshold; degraded
    /// schedules decide at registration time.
    fn register(&self, el: &web_sys::Element);
}

/// Observer-backed schedule: reveals fire on viewport intersection.
#[cfg(feature = "hydrate")]
struct ObserverSchedule {
    observer: web_sys::IntersectionObserver,
}

#[cfg(feature = "hydrate")]
impl RevealSchedule for ObserverSchedule {
    fn register(&self, el: &web_sys::Element) {
        self.observer.observe(el);
    }
}

/// Degraded schedule that runs the reveal immediately at registration.
#[cfg(feature = "hydrate")]
struct EagerSchedule {
    action: Rc<dyn Fn(&web_sys::Element)>,
}

#[cfg(feature = "hydrate")]
impl RevealSchedule for EagerSchedule {
    fn register(&self, el: &web_sys::Element) {
        (self.action)(el);
    }
}

/// Degraded schedule that never reveals; registered elements keep their
/// initial state.
#[cfg(feature = "hydrate")]
struct DormantSchedule;

#[cfg(feature = "hydrate")]
impl RevealSchedule for DormantSchedule {
    fn register(&self, _el: &web_sys::Element) {}
}

/// Whether the platform exposes `IntersectionObserver`.
#[cfg(feature = "hydrate")]
fn observer_supported(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

/// Build an observer-backed schedule running `action` on every element
/// whose visible fraction crosses `threshold`. `None` when the capability
/// is unavailable or construction fails.
#[cfg(feature = "hydrate")]
fn observer_schedule(
    action: Rc<dyn Fn(&web_sys::Element)>,
    threshold: f64,
    root_margin: Option<&str>,
) -> Option<ObserverSchedule> {
    let window = web_sys::window()?;
    if !observer_supported(&window) {
        return None;
    }

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                // One-shot: entries below the threshold are ignored, a
                // revealed element is never reverted.
                if !entry.is_intersecting() {
                    continue;
                }
                action(&entry.target());
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
            .ok()?;
    // The observer outlives this scope for the page's lifetime.
    cb.forget();
    Some(ObserverSchedule { observer })
}

/// Wire the fade-and-slide reveal for every [`CARD_SELECTOR`] element.
///
/// Cards start transparent and offset; each reveals once when it enters
/// the viewport. Without intersection support cards stay hidden.
#[cfg(feature = "hydrate")]
pub fn init_card_reveal(document: &web_sys::Document) {
    let schedule: Box<dyn RevealSchedule> =
        match observer_schedule(Rc::new(reveal_card), CARD_THRESHOLD, Some(CARD_ROOT_MARGIN)) {
            Some(observed) => Box::new(observed),
            None => Box::new(DormantSchedule),
        };

    for el in elements_matching(document, CARD_SELECTOR) {
        hide_card(&el);
        schedule.register(&el);
    }
}

/// Wire the fill animation for every [`PROGRESS_SELECTOR`] element.
///
/// Each bar's target width is captured before the bar is zeroed; visible
/// bars animate to the target after [`PROGRESS_DELAY_MS`]. Without
/// intersection support every bar animates immediately.
#[cfg(feature = "hydrate")]
pub fn init_progress_reveal(document: &web_sys::Document) {
    let schedule: Box<dyn RevealSchedule> =
        match observer_schedule(Rc::new(animate_progress_bar), PROGRESS_THRESHOLD, None) {
            Some(observed) => Box::new(observed),
            None => Box::new(EagerSchedule {
                action: Rc::new(animate_progress_bar),
            }),
        };

    for el in elements_matching(document, PROGRESS_SELECTOR) {
        stage_progress_bar(&el);
        schedule.register(&el);
    }
}

#[cfg(feature = "hydrate")]
fn elements_matching(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

#[cfg(feature = "hydrate")]
fn hide_card(el: &web_sys::Element) {
    let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let style = html.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", "translateY(30px)");
    let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
}

#[cfg(feature = "hydrate")]
fn reveal_card(el: &web_sys::Element) {
    let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let style = html.style();
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translateY(0)");
}

/// Capture the bar's target width into an attribute, then zero the bar.
#[cfg(feature = "hydrate")]
fn stage_progress_bar(el: &web_sys::Element) {
    let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let style = html.style();
    let target = reveal_target_width(&style.get_property_value("width").unwrap_or_default());
    let _ = el.set_attribute(TARGET_WIDTH_ATTR, &target);
    let _ = style.set_property("width", "0%");
}

#[cfg(feature = "hydrate")]
fn animate_progress_bar(el: &web_sys::Element) {
    let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let target = el
        .get_attribute(TARGET_WIDTH_ATTR)
        .unwrap_or_else(|| reveal_target_width(""));

    let _ = html.style().set_property("width", "0%");

    let el = el.clone();
    Timeout::new(PROGRESS_DELAY_MS, move || {
        if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property("width", &target);
        }
    })
    .forget();
}

//! Event scheduling helpers: frame coalescing, debounce, and throttle.
//!
//! ARCHITECTURE
//! ============
//! [`FrameGate`] carries the "at most one queued update" rule on its own so
//! the coalescing contract stays testable off-browser; the wasm glue around
//! it only schedules callbacks.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Scroll offset in CSS pixels past which the navbar carries its
/// `scrolled` styling.
pub const NAVBAR_SCROLLED_OFFSET_PX: f64 = 100.0;

/// Whether the navbar should be styled as scrolled at `scroll_top`.
#[must_use]
pub fn navbar_is_scrolled(scroll_top: f64) -> bool {
    scroll_top > NAVBAR_SCROLLED_OFFSET_PX
}

/// Single-flag gate admitting at most one queued update at a time.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Arm the gate. Returns `true` when the caller owns the next update,
    /// `false` while an update is already queued.
    pub fn try_arm(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Release the gate after the queued update ran.
    pub fn release(&mut self) {
        self.pending = false;
    }

    /// Whether an update is currently queued.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Run `update` on the next animation frame, coalescing bursts of calls.
///
/// While a frame callback is queued on `gate`, further calls return without
/// scheduling anything. When frame scheduling is unavailable the update
/// runs synchronously instead.
#[cfg(feature = "hydrate")]
pub fn coalesce_to_frame<F>(gate: &Rc<RefCell<FrameGate>>, update: F)
where
    F: Fn() + Clone + 'static,
{
    if !gate.borrow_mut().try_arm() {
        return;
    }

    let Some(window) = web_sys::window() else {
        gate.borrow_mut().release();
        update();
        return;
    };

    let gate_for_cb = Rc::clone(gate);
    let update_for_cb = update.clone();
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        gate_for_cb.borrow_mut().release();
        update_for_cb();
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        gate.borrow_mut().release();
        update();
    }
}

/// Wire the window scroll listener that keeps the navbar's scrolled flag
/// fresh, collapsing scroll bursts to at most one update per frame.
#[cfg(feature = "hydrate")]
pub fn wire_navbar_scroll_listener(on_update: impl Fn(bool) + Clone + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let gate = Rc::new(RefCell::new(FrameGate::default()));
    let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let on_update = on_update.clone();
        coalesce_to_frame(&gate, move || {
            on_update(navbar_is_scrolled(current_scroll_top()));
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    // Page-lifetime listener, never removed.
    on_scroll.forget();
}

#[cfg(feature = "hydrate")]
fn current_scroll_top() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let top = window.page_y_offset().unwrap_or_default();
    if top > 0.0 {
        top
    } else {
        window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_top()))
    }
}

/// Debounced runner: the wrapped closure executes `wait_ms` after the last
/// burst of calls goes quiet.
///
/// With `immediate`, the first call in a burst runs right away and the
/// trailing run is suppressed instead. General-purpose helper; the navbar
/// scroll flow uses frame coalescing rather than this.
#[cfg(feature = "hydrate")]
pub struct Debounce {
    wait_ms: u32,
    immediate: bool,
    run: Rc<dyn Fn()>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

#[cfg(feature = "hydrate")]
impl Debounce {
    pub fn new(wait_ms: u32, immediate: bool, run: impl Fn() + 'static) -> Self {
        Self {
            wait_ms,
            immediate,
            run: Rc::new(run),
            timer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self) {
        let had_timer = self
            .timer
            .borrow_mut()
            .take()
            .map(Timeout::cancel)
            .is_some();
        let call_now = self.immediate && !had_timer;

        let run = Rc::clone(&self.run);
        let timer_slot = Rc::clone(&self.timer);
        let immediate = self.immediate;
        let timeout = Timeout::new(self.wait_ms, move || {
            timer_slot.borrow_mut().take();
            if !immediate {
                run();
            }
        });
        *self.timer.borrow_mut() = Some(timeout);

        if call_now {
            (self.run)();
        }
    }
}

/// Throttled runner: the wrapped closure executes at most once per
/// `limit_ms` interval; calls inside the interval are dropped.
///
/// General-purpose helper, not used by the navbar scroll flow.
#[cfg(feature = "hydrate")]
pub struct Throttle {
    limit_ms: u32,
    run: Rc<dyn Fn()>,
    blocked: Rc<RefCell<bool>>,
}

#[cfg(feature = "hydrate")]
impl Throttle {
    pub fn new(limit_ms: u32, run: impl Fn() + 'static) -> Self {
        Self {
            limit_ms,
            run: Rc::new(run),
            blocked: Rc::new(RefCell::new(false)),
        }
    }

    pub fn call(&self) {
        if *self.blocked.borrow() {
            return;
        }
        (self.run)();
        *self.blocked.borrow_mut() = true;

        let blocked = Rc::clone(&self.blocked);
        Timeout::new(self.limit_ms, move || {
            *blocked.borrow_mut() = false;
        })
        .forget();
    }
}

//! Page-lifetime listeners and startup touches outside any one component.
//!
//! Wires the `loaded`/`offline` body classes, the visibility and error
//! diagnostics, and the font-host preconnect hints. Listeners are installed
//! once and never torn down; the page owns them for its whole life.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Install every page-lifetime hook. Called once from the home page mount.
pub fn init_page_lifecycle() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        mark_body_loaded(&document);
        preconnect_font_hosts(&document);
        wire_connectivity_classes(&window, &document);
        wire_visibility_log(&document);
        wire_error_log(&window);
    }
}

/// Flag the body so CSS transitions only start once the page is wired.
#[cfg(feature = "hydrate")]
fn mark_body_loaded(document: &web_sys::Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }
}

/// Preconnect hints for the font hosts.
#[cfg(feature = "hydrate")]
fn preconnect_font_hosts(document: &web_sys::Document) {
    let Some(head) = document.head() else {
        return;
    };
    for (href, crossorigin) in [
        ("https://fonts.googleapis.com", false),
        ("https://fonts.gstatic.com", true),
    ] {
        let Ok(el) = document.create_element("link") else {
            continue;
        };
        let Ok(link) = el.dyn_into::<web_sys::HtmlLinkElement>() else {
            continue;
        };
        link.set_rel("preconnect");
        link.set_href(href);
        if crossorigin {
            link.set_cross_origin(Some("anonymous"));
        }
        let _ = head.append_child(&link);
    }
}

/// Mirror connectivity changes into an `offline` class on the body.
#[cfg(feature = "hydrate")]
fn wire_connectivity_classes(window: &web_sys::Window, document: &web_sys::Document) {
    let Some(body) = document.body() else {
        return;
    };

    let body_online = body.clone();
    let on_online = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let _ = body_online.class_list().remove_1("offline");
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = window.add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref());
    on_online.forget();

    let on_offline = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let _ = body.class_list().add_1("offline");
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = window.add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref());
    on_offline.forget();
}

/// Log when the page becomes visible again.
#[cfg(feature = "hydrate")]
fn wire_visibility_log(document: &web_sys::Document) {
    let doc = document.clone();
    let on_visibility = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if doc.visibility_state() == web_sys::VisibilityState::Visible {
            log::debug!("page is visible again");
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = document
        .add_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref());
    on_visibility.forget();
}

/// Last-resort observability hook: uncaught errors are logged and nothing
/// else changes.
#[cfg(feature = "hydrate")]
fn wire_error_log(window: &web_sys::Window) {
    let on_error = Closure::wrap(Box::new(move |ev: web_sys::ErrorEvent| {
        log::warn!("uncaught page error: {}", ev.message());
    }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();
}

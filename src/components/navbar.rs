//! Fixed top navigation: brand, section links, theme toggle, mobile menu.
//!
//! DESIGN
//! ======
//! The mobile menu's open flag lives in [`UiState`] and drives the `active`
//! class on the menu and its toggle button together, so the two elements
//! flip in lock-step by construction. Document-level listeners (outside
//! click, resize, coalesced scroll) are installed once after mount and live
//! for the page's lifetime.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::scroll::{menu_must_close, scroll_to_section, viewport_width};
use crate::util::theme::{self, Theme};

const NAV_SECTIONS: [(&str, &str); 5] = [
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("contact", "Contact"),
];

/// Top navigation bar.
///
/// Applies the stored theme on mount, then reacts to the toggle button,
/// the mobile menu button, and the section links.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Startup: reflect the stored preference onto the document, and apply
    // the desktop policy once (a wide viewport never shows the menu).
    Effect::new(move || {
        let initial = theme::stored_theme();
        theme::apply_theme(initial);
        let force_close = viewport_width().is_some_and(menu_must_close);
        ui.update(|u| {
            u.theme = initial;
            if force_close {
                u.mobile_menu_open = false;
            }
        });
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        wire_document_listeners(ui);
    });

    let on_theme_toggle = move |_| {
        ui.update(|u| u.theme = theme::toggle_theme(u.theme));
    };

    let on_menu_toggle = move |_| {
        ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open);
    };

    let menu_open = move || ui.get().mobile_menu_open;
    let theme_icon = move || {
        if ui.get().theme == Theme::Dark {
            "\u{263e}"
        } else {
            "\u{2600}"
        }
    };

    view! {
        <nav class="navbar" class:scrolled=move || ui.get().navbar_scrolled>
            <div class="navbar__inner">
                <a href="#home" class="navbar__brand">"Tej Gokani"</a>

                <ul id="nav-menu" class="nav-menu" class:active=menu_open>
                    {NAV_SECTIONS
                        .iter()
                        .map(|(section, label)| {
                            let section = *section;
                            view! {
                                <li class="nav-menu__item">
                                    <a
                                        href=format!("#{section}")
                                        class="nav-link"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to_section(section);
                                            ui.update(|u| u.mobile_menu_open = false);
                                        }
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>

                <button
                    id="theme-toggle"
                    class="theme-toggle"
                    title="Toggle theme"
                    on:click=on_theme_toggle
                >
                    {theme_icon}
                </button>
                <button
                    id="mobile-menu-toggle"
                    class="mobile-menu-toggle"
                    class:active=menu_open
                    aria-label="Toggle navigation"
                    on:click=on_menu_toggle
                >
                    <span class="mobile-menu-toggle__bar"></span>
                    <span class="mobile-menu-toggle__bar"></span>
                    <span class="mobile-menu-toggle__bar"></span>
                </button>
            </div>
        </nav>
    }
}

/// Install the navbar's document- and window-level listeners.
#[cfg(feature = "hydrate")]
fn wire_document_listeners(ui: RwSignal<UiState>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::util::schedule;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // Desktop never shows the mobile menu: any resize past the breakpoint
    // forces it closed, whatever its prior state.
    let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if viewport_width().is_some_and(menu_must_close) {
            ui.update(|u| u.mobile_menu_open = false);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();

    // Clicks landing outside both the menu and its toggle close the menu.
    let doc = document.clone();
    let on_document_click = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let inside = ["nav-menu", "mobile-menu-toggle"].iter().any(|id| {
            doc.get_element_by_id(id)
                .is_some_and(|el| el.contains(Some(&target)))
        });
        if !inside {
            ui.update(|u| u.mobile_menu_open = false);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = document
        .add_event_listener_with_callback("click", on_document_click.as_ref().unchecked_ref());
    on_document_click.forget();

    // Scrolled styling, coalesced to one update per animation frame.
    schedule::wire_navbar_scroll_listener(move |scrolled| {
        ui.update(|u| u.navbar_scrolled = scrolled);
    });
}

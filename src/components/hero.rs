//! Landing section with the call-to-action buttons.
//!
//! The buttons share the navbar's scroll-to-anchor helper; unlike the nav
//! links they leave the mobile menu state alone.

use leptos::prelude::*;

use crate::util::scroll::scroll_to_section;

/// Hero section with name, tagline, and call-to-action buttons.
#[component]
pub fn Hero() -> impl IntoView {
    let goto = |section: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            scroll_to_section(section);
        }
    };

    view! {
        <section id="home" class="hero">
            <div class="hero__content">
                <p class="hero__greeting">"Hi, I'm"</p>
                <h1 class="hero__title">"Tej Gokani"</h1>
                <p class="hero__subtitle">
                    "Software engineer building reliable products end to end."
                </p>
                <div class="hero-buttons">
                    <a href="#contact" class="btn btn--primary" on:click=goto("contact")>
                        "Get in Touch"
                    </a>
                    <a href="#about" class="btn btn--secondary" on:click=goto("about")>
                        "Learn More"
                    </a>
                </div>
            </div>
        </section>
    }
}

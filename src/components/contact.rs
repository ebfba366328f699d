//! Contact section routing the primary address through the Gmail helper.
//!
//! Only links whose visible text carries the contact address skip their
//! default `mailto:` navigation; every other contact link behaves like an
//! ordinary anchor.

use leptos::prelude::*;

use crate::util::email::{self, CONTACT_ADDRESS};

/// Contact section with the email and profile links.
#[component]
pub fn Contact() -> impl IntoView {
    let on_email_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let text = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.text_content())
                .unwrap_or_default();
            if email::intercepts_mail_link(&text) {
                ev.prevent_default();
                email::open_email_compose();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Contact"</h2>
            <div class="contact__methods">
                <div class="contact-method">
                    <span class="contact-method__label">"Email"</span>
                    <a
                        href=format!("mailto:{CONTACT_ADDRESS}")
                        class="email-link contact-link"
                        on:click=on_email_click
                    >
                        {CONTACT_ADDRESS}
                    </a>
                </div>
                <div class="contact-method">
                    <span class="contact-method__label">"LinkedIn"</span>
                    <a
                        href="https://www.linkedin.com/in/tejgokani"
                        class="contact-link"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "linkedin.com/in/tejgokani"
                    </a>
                </div>
                <div class="contact-method">
                    <span class="contact-method__label">"GitHub"</span>
                    <a
                        href="https://github.com/tejgokani"
                        class="contact-link"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "github.com/tejgokani"
                    </a>
                </div>
            </div>
        </section>
    }
}

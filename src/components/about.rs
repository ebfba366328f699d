//! Short introduction section.

use leptos::prelude::*;

/// About section.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2 class="section-title">"About"</h2>
            <p class="about__text">
                "I enjoy taking products from idea to production: shaping the
                 data model, building the service layer, and finishing the
                 front end. Away from the keyboard I mentor student
                 developers and tinker with home automation."
            </p>
        </section>
    }
}

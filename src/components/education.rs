//! Education section.

use leptos::prelude::*;

/// Education section.
#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="education">
            <h2 class="section-title">"Education"</h2>
            <div class="education-card">
                <h3 class="education-card__school">"University of Washington"</h3>
                <p class="education-card__degree">"B.S. Computer Science, 2023"</p>
                <p class="education-card__detail">
                    "Coursework in distributed systems, databases, and
                     human-computer interaction."
                </p>
            </div>
        </section>
    }
}

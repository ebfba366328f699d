//! Skills section: one card per skill with a proficiency bar.
//!
//! The inline fill width is the value the reveal animation captures before
//! zeroing the bar, so it doubles as the animation target.

use leptos::prelude::*;

const SKILLS: [(&str, &str); 6] = [
    ("Python", "90%"),
    ("JavaScript", "85%"),
    ("React", "80%"),
    ("SQL", "85%"),
    ("AWS", "70%"),
    ("Data Analysis", "75%"),
];

/// Skills section with proficiency bars.
#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills__grid">
                {SKILLS
                    .iter()
                    .map(|(name, width)| {
                        view! {
                            <div class="skill-card">
                                <span class="skill-card__name">{*name}</span>
                                <div class="progress-bar">
                                    <div
                                        class="progress-fill"
                                        style=format!("width: {width}")
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

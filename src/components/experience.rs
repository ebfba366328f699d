//! Work experience section.

use leptos::prelude::*;

struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    summary: &'static str,
}

const ROLES: [Role; 2] = [
    Role {
        title: "Software Engineer",
        company: "Fintech Startup",
        period: "2023 - Present",
        summary: "Own the payments reconciliation service and its reporting dashboard.",
    },
    Role {
        title: "Software Engineering Intern",
        company: "Cloud Platform Co",
        period: "2022",
        summary: "Built internal tooling for deployment previews and log triage.",
    },
];

/// Experience section listing recent roles.
#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="experience">
            <h2 class="section-title">"Experience"</h2>
            <div class="experience__list">
                {ROLES
                    .iter()
                    .map(|role| {
                        view! {
                            <div class="experience-card">
                                <h3 class="experience-card__title">{role.title}</h3>
                                <p class="experience-card__company">
                                    {role.company} " \u{b7} " {role.period}
                                </p>
                                <p class="experience-card__summary">{role.summary}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

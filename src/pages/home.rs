//! Single portfolio page composing every section.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::education::Education;
use crate::components::experience::Experience;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::skills::Skills;
use crate::util::lifecycle;

/// Home page: navbar, the portfolio sections, and the one-time page wiring
/// that runs after mount.
#[component]
pub fn HomePage() -> impl IntoView {
    Effect::new(move || {
        lifecycle::init_page_lifecycle();

        #[cfg(feature = "hydrate")]
        {
            use crate::util::reveal;

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                reveal::init_card_reveal(&document);
                reveal::init_progress_reveal(&document);
            }
        }
    });

    view! {
        <Navbar/>
        <main class="page">
            <Hero/>
            <About/>
            <Skills/>
            <Experience/>
            <Education/>
            <Contact/>
        </main>
        <Footer/>
    }
}

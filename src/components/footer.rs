//! Page footer.

use leptos::prelude::*;

/// Footer with a plain copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__note">"\u{a9} 2025 Tej Gokani"</p>
        </footer>
    }
}

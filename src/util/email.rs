//! Gmail compose link for the contact address.
//!
//! Builds the compose URL with a fixed recipient, subject, and body, and
//! opens it in a new browsing context with no window-opener linkage.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Recipient address shown in the contact section.
pub const CONTACT_ADDRESS: &str = "tejgokani@gmail.com";

const SUBJECT: &str = "Portfolio Contact - Let's Connect";
const BODY: &str = "Hi Tej,\n\nI found your portfolio website and would like to discuss potential opportunities.\n\nBest regards,";

/// Characters `encodeURIComponent` leaves unescaped: alphanumerics plus
/// `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Compose URL for the Gmail web interface with the fixed subject and
/// body, both percent-encoded.
#[must_use]
pub fn compose_url() -> String {
    format!(
        "https://mail.google.com/mail/?view=cm&fs=1&to={CONTACT_ADDRESS}&su={}&body={}",
        encode_component(SUBJECT),
        encode_component(BODY),
    )
}

/// Whether a clicked mail link should be routed to the compose helper
/// instead of its default `mailto:` navigation.
///
/// Only links whose visible text carries the contact address are
/// intercepted; every other mail link keeps its default behavior.
#[must_use]
pub fn intercepts_mail_link(link_text: &str) -> bool {
    link_text.contains(CONTACT_ADDRESS)
}

/// Open the compose URL in a new browsing context.
///
/// The new context is opened with `noopener,noreferrer` so it holds no
/// opener linkage back to the page.
pub fn open_email_compose() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target_and_features(
                &compose_url(),
                "_blank",
                "noopener,noreferrer",
            );
        }
    }
}

/// wasm-bindgen export so the compose helper stays invocable from outside
/// this crate's own event bindings.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = "openEmailCompose")]
pub fn open_email_compose_export() {
    open_email_compose();
}

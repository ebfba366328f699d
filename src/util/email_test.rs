#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn compose_url_targets_gmail_compose_endpoint() {
    let url = compose_url();
    assert!(url.starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=tejgokani@gmail.com"));
}

#[test]
fn compose_url_percent_encodes_the_subject() {
    // Spaces escape to %20; hyphen and apostrophe survive unescaped, as
    // encodeURIComponent leaves them.
    assert!(compose_url().contains("&su=Portfolio%20Contact%20-%20Let's%20Connect"));
}

#[test]
fn compose_url_percent_encodes_the_body() {
    let url = compose_url();
    assert!(url.contains("&body=Hi%20Tej%2C%0A%0A"));
    assert!(url.ends_with("Best%20regards%2C"));
}

#[test]
fn compose_url_has_no_raw_whitespace() {
    let url = compose_url();
    assert!(!url.contains(' '));
    assert!(!url.contains('\n'));
}

#[test]
fn only_links_showing_the_contact_address_are_intercepted() {
    assert!(intercepts_mail_link("tejgokani@gmail.com"));
    assert!(intercepts_mail_link("Email me: tejgokani@gmail.com"));
    assert!(!intercepts_mail_link("someone.else@example.com"));
    assert!(!intercepts_mail_link("Get in touch"));
    assert!(!intercepts_mail_link(""));
}

#[test]
fn open_is_noop_but_callable() {
    open_email_compose();
}

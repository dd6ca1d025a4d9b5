//! Integration tests for message dispatch.
//!
//! Covers link composition and the full compose-form flow through a session.

use wa_messenger::{
    compose_link, send, Contact, ContactDirectory, MessengerSession, ValidationError,
};

#[test]
fn test_compose_link_format() {
    let contact = Contact::parse("Bob", "15551234567").unwrap();

    assert_eq!(
        compose_link(&contact, "hello world"),
        "https://wa.me/15551234567?text=hello%20world"
    );
}

#[test]
fn test_compose_link_emoji() {
    let contact = Contact::parse("Bob", "15551234567").unwrap();

    assert_eq!(
        compose_link(&contact, "hi 👋"),
        "https://wa.me/15551234567?text=hi%20%F0%9F%91%8B"
    );
}

/// Sending to an empty directory fails and produces no link.
#[test]
fn test_send_empty_directory_not_found() {
    let directory = ContactDirectory::new();

    let err = send(&directory, "Bob", "hi").unwrap_err();
    assert_eq!(err, ValidationError::ContactNotFound("Bob".to_string()));
    assert!(err.to_string().contains("not found"));
}

/// End-to-end session flow: add a contact, pick it from suggestions, send.
///
/// This test validates:
/// - The add form closes and clears on success
/// - Selecting a suggestion fills the recipient with the stored name
/// - A successful send returns the link and clears the compose form
#[test]
fn test_session_add_select_send() {
    let mut session = MessengerSession::new();

    session.open_add_contact();
    session.set_new_contact_name("Anna Lee");
    session.set_new_contact_phone("+351 912 345 678");
    session.submit_add_contact().unwrap();
    assert!(!session.is_add_contact_open());

    session.set_recipient_name("lee");
    assert_eq!(session.suggestions().len(), 1);
    assert_eq!(session.select_contact(0), Some("Anna Lee"));

    session.set_message("Olá, tudo bem?");
    let link = session.submit_message().unwrap();

    assert_eq!(
        link,
        "https://wa.me/351912345678?text=Ol%C3%A1%2C%20tudo%20bem%3F"
    );
    assert_eq!(session.recipient_name(), "");
    assert_eq!(session.message(), "");
    assert!(session.error().is_none());
}

/// A failed send keeps the typed input and shows exactly one error.
#[test]
fn test_session_failed_send_keeps_input() {
    let mut session = MessengerSession::new();
    session.set_recipient_name("Zoe");
    session.set_message("are you there?");

    assert!(session.submit_message().is_err());
    assert_eq!(
        session.error(),
        Some("Contact \"Zoe\" not found. Please add them first.")
    );
    assert_eq!(session.recipient_name(), "Zoe");
    assert_eq!(session.message(), "are you there?");
}

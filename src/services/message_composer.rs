//! WhatsApp message composition.
//!
//! Builds `wa.me` deep links with a pre-filled message. Opening the link is
//! the caller's job; nothing here performs I/O.

use crate::domain::{ValidationError, ValidationResult};
use crate::models::Contact;
use crate::services::ContactDirectory;
use tracing::debug;

/// Base of every outbound deep link.
pub const WA_ME_BASE_URL: &str = "https://wa.me/";

/// Build `https://wa.me/<phone>?text=<percent-encoded message>`.
///
/// Everything outside the RFC 3986 unreserved set is percent-encoded,
/// UTF-8 included. The message is encoded verbatim, whitespace and all.
pub fn compose_link(contact: &Contact, message: &str) -> String {
    format!(
        "{}{}?text={}",
        WA_ME_BASE_URL,
        contact.phone(),
        urlencoding::encode(message)
    )
}

/// Resolve `recipient_name` in `directory` and compose the link for `message`.
///
/// # Errors
/// Checked in order:
/// - `MissingRecipient` if the recipient is blank
/// - `MissingMessage` if the message is blank
/// - `ContactNotFound` if no contact has that name, ignoring case
pub fn send(
    directory: &ContactDirectory,
    recipient_name: &str,
    message: &str,
) -> ValidationResult<String> {
    if recipient_name.trim().is_empty() {
        return Err(ValidationError::MissingRecipient);
    }

    if message.trim().is_empty() {
        return Err(ValidationError::MissingMessage);
    }

    let contact = directory
        .find_by_name(recipient_name)
        .ok_or_else(|| ValidationError::ContactNotFound(recipient_name.to_string()))?;

    debug!(message_len = message.len(), "Composing wa.me link");
    Ok(compose_link(contact, message))
}

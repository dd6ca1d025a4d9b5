//! One interactive messenger session.
//!
//! Holds the contact directory together with the transient state of the
//! add-contact and compose forms, and applies the form rules: which fields
//! are cleared on success, which error banner is shown on failure.

use crate::domain::ValidationResult;
use crate::models::Contact;
use crate::services::{self, ContactDirectory};
use tracing::debug;

/// Directory plus form state for a single user session.
#[derive(Debug, Clone, Default)]
pub struct MessengerSession {
    directory: ContactDirectory,

    new_contact_name: String,
    new_contact_phone: String,
    show_add_contact: bool,

    recipient_name: String,
    message: String,
    suggestions: Vec<Contact>,

    error: Option<String>,
}

impl MessengerSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Add-contact form ====================

    /// Show the add-contact panel.
    pub fn open_add_contact(&mut self) {
        self.show_add_contact = true;
    }

    /// Hide the add-contact panel, discarding its input and any error.
    pub fn cancel_add_contact(&mut self) {
        self.show_add_contact = false;
        self.new_contact_name.clear();
        self.new_contact_phone.clear();
        self.error = None;
    }

    pub fn set_new_contact_name(&mut self, value: impl Into<String>) {
        self.new_contact_name = value.into();
    }

    pub fn set_new_contact_phone(&mut self, value: impl Into<String>) {
        self.new_contact_phone = value.into();
    }

    /// Submit the add-contact form.
    ///
    /// On success the form is cleared and closed and the error banner
    /// dismissed. On failure the banner shows the validation message and the
    /// input is kept for correction.
    pub fn submit_add_contact(&mut self) -> ValidationResult<Contact> {
        match self
            .directory
            .add_contact(&self.new_contact_name, &self.new_contact_phone)
        {
            Ok(contact) => {
                self.new_contact_name.clear();
                self.new_contact_phone.clear();
                self.show_add_contact = false;
                self.error = None;
                Ok(contact)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    // ==================== Compose form ====================

    /// Update the recipient input and recompute suggestions.
    pub fn set_recipient_name(&mut self, value: impl Into<String>) {
        self.recipient_name = value.into();
        self.suggestions = self
            .directory
            .suggest(&self.recipient_name)
            .into_iter()
            .cloned()
            .collect();
    }

    /// Pick the suggestion at `index` as recipient.
    ///
    /// Out-of-range indices are ignored.
    pub fn select_contact(&mut self, index: usize) -> Option<&str> {
        let contact = self.suggestions.get(index)?;
        self.recipient_name = contact.name().to_string();
        self.suggestions.clear();
        Some(self.recipient_name.as_str())
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }

    /// Submit the compose form.
    ///
    /// Returns the wa.me link for the caller to open. On success both compose
    /// fields are cleared; on failure the banner shows the validation message.
    pub fn submit_message(&mut self) -> ValidationResult<String> {
        self.error = None;

        match services::send(&self.directory, &self.recipient_name, &self.message) {
            Ok(link) => {
                self.message.clear();
                self.recipient_name.clear();
                debug!("Message link composed, compose form cleared");
                Ok(link)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    // ==================== Directory ====================

    /// Remove the contact at `index`; out-of-range is a no-op.
    pub fn remove_contact(&mut self, index: usize) -> Option<Contact> {
        self.directory.remove_contact(index)
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut ContactDirectory {
        &mut self.directory
    }

    // ==================== Read-only state ====================

    pub fn new_contact_name(&self) -> &str {
        &self.new_contact_name
    }

    pub fn new_contact_phone(&self) -> &str {
        &self.new_contact_phone
    }

    pub fn is_add_contact_open(&self) -> bool {
        self.show_add_contact
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn suggestions(&self) -> &[Contact] {
        &self.suggestions
    }

    /// The current error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

//! In-memory contact directory.
//!
//! An ordered list of contacts owned by a single session. Nothing here is
//! persisted; the directory lives and dies with its owner.

use crate::domain::ValidationResult;
use crate::matching::NameMatcher;
use crate::models::Contact;
use tracing::debug;

/// Ordered, in-memory list of contacts.
///
/// Duplicate names are allowed. Lookups by name resolve to the earliest entry.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
    matcher: NameMatcher,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw form input and append the resulting contact.
    ///
    /// The name is trimmed and the phone reduced to its digits before storage.
    ///
    /// # Errors
    /// - `MissingContactFields` if either field is blank
    /// - `InvalidPhone` if fewer than ten digits remain
    ///
    /// The directory is left untouched on error.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> ValidationResult<Contact> {
        let contact = Contact::parse(name, phone)?;
        self.contacts.push(contact.clone());

        debug!(
            index = self.contacts.len() - 1,
            phone_digits = contact.phone().len(),
            "Contact added"
        );

        Ok(contact)
    }

    /// Remove the contact at `index`.
    ///
    /// Out-of-range indices are a no-op and return None.
    pub fn remove_contact(&mut self, index: usize) -> Option<Contact> {
        if index >= self.contacts.len() {
            debug!(index, len = self.contacts.len(), "Remove ignored, index out of range");
            return None;
        }

        let removed = self.contacts.remove(index);
        debug!(index, remaining = self.contacts.len(), "Contact removed");
        Some(removed)
    }

    /// First contact whose name equals `query`, ignoring case.
    pub fn find_by_name(&self, query: &str) -> Option<&Contact> {
        self.matcher
            .find_exact(query, &self.contacts)
            .map(|(_, contact)| contact)
    }

    /// Contacts whose names contain `partial`, ignoring case, in list order.
    pub fn suggest(&self, partial: &str) -> Vec<&Contact> {
        self.matcher.suggest(partial, &self.contacts)
    }

    /// All contacts in list order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contact at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Matcher used for lookups, exposed so callers can label suggestions.
    pub fn matcher(&self) -> &NameMatcher {
        &self.matcher
    }
}

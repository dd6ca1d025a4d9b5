//! Contact model representing one message recipient.

use crate::domain::{ContactName, PhoneNumber, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// A stored `(name, phone)` pair usable as a message recipient.
///
/// Contacts are never mutated in place: fields are private and only
/// readable through accessors. To change a contact, remove it and add a new one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: ContactName,
    phone: PhoneNumber,
}

impl Contact {
    /// Create a contact from already validated parts.
    pub fn new(name: ContactName, phone: PhoneNumber) -> Self {
        Self { name, phone }
    }

    /// Validate raw form input and build a contact.
    ///
    /// Both fields are checked for blankness before the phone digits are
    /// counted, so a blank name with a short phone reports the missing field.
    pub fn parse(name: &str, phone: &str) -> ValidationResult<Self> {
        if name.trim().is_empty() || phone.trim().is_empty() {
            return Err(ValidationError::MissingContactFields);
        }
        Ok(Self::new(ContactName::new(name)?, PhoneNumber::new(phone)?))
    }

    /// Trimmed display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Digits-only phone number, country code included.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }
}

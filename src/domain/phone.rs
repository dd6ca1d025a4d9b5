//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum number of digits a stored phone number must carry.
pub const MIN_PHONE_DIGITS: usize = 10;

/// A type-safe wrapper for phone numbers in wa.me form.
///
/// Formatting characters are stripped at construction time, so the wrapped
/// value is always a run of ASCII digits at least [`MIN_PHONE_DIGITS`] long,
/// country code included.
///
/// # Example
///
/// ```
/// use wa_messenger::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from user input.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingContactFields` if the input is blank.
    /// - `ValidationError::InvalidPhone` if fewer than [`MIN_PHONE_DIGITS`]
    ///   digits remain after stripping.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref();
        if phone.trim().is_empty() {
            return Err(ValidationError::MissingContactFields);
        }

        let digits = Self::digits_only(phone);
        if digits.len() < MIN_PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(Self(digits))
    }

    /// Strip everything that is not an ASCII digit.
    pub fn digits_only(raw: &str) -> String {
        raw.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

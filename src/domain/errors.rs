//! Domain validation errors.
//!
//! Every failure in this crate is a user-input problem that is fixed by
//! correcting the input and resubmitting. The `Display` text of each variant
//! is the exact message shown to the user.

use thiserror::Error;

/// Errors that can occur while validating form input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name or phone was blank on the add-contact form.
    #[error("Please fill in both name and phone number")]
    MissingContactFields,

    /// The phone number has fewer than the required number of digits.
    #[error("Please enter a valid phone number")]
    InvalidPhone,

    /// The compose form has no recipient.
    #[error("Please enter a recipient name")]
    MissingRecipient,

    /// The compose form has no message text.
    #[error("Please enter a message")]
    MissingMessage,

    /// No stored contact has the requested name.
    #[error("Contact \"{0}\" not found. Please add them first.")]
    ContactNotFound(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::MissingContactFields.to_string(),
            "Please fill in both name and phone number"
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid phone number"
        );
        assert_eq!(
            ValidationError::MissingRecipient.to_string(),
            "Please enter a recipient name"
        );
        assert_eq!(
            ValidationError::MissingMessage.to_string(),
            "Please enter a message"
        );
    }

    #[test]
    fn test_not_found_quotes_recipient() {
        let err = ValidationError::ContactNotFound("Bob".to_string());
        assert_eq!(
            err.to_string(),
            "Contact \"Bob\" not found. Please add them first."
        );
    }
}

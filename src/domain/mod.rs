//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the two fields a contact is
//! made of. These value objects validate at construction time, so a stored
//! contact can never hold a blank name or a malformed phone number.

pub mod contact_name;
pub mod errors;
pub mod phone;

pub use contact_name::ContactName;
pub use errors::{ValidationError, ValidationResult};
pub use phone::{PhoneNumber, MIN_PHONE_DIGITS};

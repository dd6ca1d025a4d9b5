//! Error types for the messenger.
//!
//! Validation errors live with the domain value objects; this module holds
//! the process-level errors and re-exports the rest.

use thiserror::Error;

pub use crate::domain::errors::{ValidationError, ValidationResult};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

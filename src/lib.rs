//! WA Messenger - a local contact directory with a WhatsApp message composer.
//!
//! Contacts (name + phone) are kept in memory for the lifetime of a session.
//! Messages are never sent directly: the composer resolves a recipient by
//! name and returns a `https://wa.me/<phone>?text=<message>` deep link for the
//! caller to open.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactName`, `PhoneNumber`) and `ValidationError`
//! - **models**: The immutable `Contact` record
//! - **matching**: Case-insensitive exact and substring name matching
//! - **services**: The contact directory and the message composer
//! - **session**: Directory plus add/compose form state for one user
//! - **config**: Configuration management from environment variables
//! - **error**: Error types
//! - **server**: MCP protocol server exposing the session as tools

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod server;
pub mod services;
pub mod session;

pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError, ValidationResult};
pub use error::ConfigError;
pub use matching::{MatchType, NameMatcher};
pub use models::Contact;
pub use server::MessengerMcpServer;
pub use services::{compose_link, send, ContactDirectory};
pub use session::MessengerSession;

//! Service layer.
//!
//! - **contact_directory**: ordered in-memory contact list with lookups
//! - **message_composer**: wa.me link composition and send validation

pub mod contact_directory;
pub mod message_composer;

pub use contact_directory::ContactDirectory;
pub use message_composer::{compose_link, send, WA_ME_BASE_URL};

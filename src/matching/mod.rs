//! Name matching for recipient lookup and suggestions.
//!
//! Both lookups are case-insensitive and walk the directory in list order.

pub mod name_matcher;

pub use name_matcher::{MatchType, NameMatcher};

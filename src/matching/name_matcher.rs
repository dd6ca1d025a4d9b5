//! Case-insensitive name matching over an ordered contact list.
//!
//! This module provides the two lookups the compose form needs:
//! - Exact matching, used to resolve the recipient before sending
//! - Substring matching, used to suggest recipients while typing

use crate::models::Contact;

/// The type of match a stored name has against a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Whole name equal to the query, ignoring case
    Exact,

    /// Query found somewhere inside the name, ignoring case
    Substring,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Substring => "substring",
        }
    }
}

/// Matcher for contact names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatcher;

impl NameMatcher {
    /// Create a new NameMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find the first contact whose name equals `query`, ignoring case.
    ///
    /// The query is compared verbatim apart from case folding; surrounding
    /// whitespace is significant. Duplicate names resolve to the earliest entry.
    ///
    /// # Returns
    /// The list index and the contact, or None if nothing matches
    pub fn find_exact<'a>(
        &self,
        query: &str,
        contacts: &'a [Contact],
    ) -> Option<(usize, &'a Contact)> {
        let normalized_query = Self::normalize_name(query);

        contacts
            .iter()
            .enumerate()
            .find(|(_, contact)| Self::normalize_name(contact.name()) == normalized_query)
    }

    /// Suggest contacts whose names contain `partial`, ignoring case.
    ///
    /// Results keep list order. Blank input yields no suggestions rather
    /// than the whole directory.
    pub fn suggest<'a>(&self, partial: &str, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        if partial.trim().is_empty() {
            return Vec::new();
        }

        let normalized_query = Self::normalize_name(partial);

        contacts
            .iter()
            .filter(|contact| Self::normalize_name(contact.name()).contains(&normalized_query))
            .collect()
    }

    /// Classify how `name` matches `query`.
    pub fn classify(&self, query: &str, name: &str) -> Option<MatchType> {
        if query.is_empty() {
            return None;
        }

        let query = Self::normalize_name(query);
        let name = Self::normalize_name(name);

        if name == query {
            Some(MatchType::Exact)
        } else if name.contains(&query) {
            Some(MatchType::Substring)
        } else {
            None
        }
    }

    /// Normalize a name for comparison.
    ///
    /// Lowercases only; whitespace is left untouched.
    pub fn normalize_name(name: &str) -> String {
        name.to_lowercase()
    }
}

//! Integration tests for the contact directory.
//!
//! These tests exercise the public directory API the way the add-contact
//! form and the recipient field drive it.

use wa_messenger::{ContactDirectory, ValidationError};

fn sample_directory() -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    directory.add_contact("Anna", "+1 555 010 0001").unwrap();
    directory.add_contact("Bob", "+1 555 010 0002").unwrap();
    directory.add_contact("Anthony", "+1 555 010 0003").unwrap();
    directory
}

/// Valid input is stored with the name trimmed and the phone reduced to digits.
///
/// This test validates:
/// - Assorted phone formats all normalize to digits only
/// - The stored digits equal the input with non-digits removed
#[test]
fn test_add_contact_stores_digits_only() {
    let inputs = [
        ("Anna", "+1 (555) 123-4567"),
        ("  Bob  ", "555.123.4567"),
        ("Carl", "+44 20 7123 4567"),
        ("Dana", "  +55 11 91234-5678 ext"),
    ];

    let mut directory = ContactDirectory::new();
    for (name, phone) in inputs {
        let contact = directory.add_contact(name, phone).unwrap();
        let expected: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        assert_eq!(contact.name(), name.trim());
        assert_eq!(contact.phone(), expected);
        assert!(contact.phone().chars().all(|c| c.is_ascii_digit()));
        assert!(contact.phone().len() >= 10);
    }

    assert_eq!(directory.len(), inputs.len());
}

/// Invalid input never reaches the list.
#[test]
fn test_add_contact_invalid_input_leaves_directory_unchanged() {
    let mut directory = sample_directory();
    let before = directory.contacts().to_vec();

    assert_eq!(
        directory.add_contact("", "5551234567").unwrap_err(),
        ValidationError::MissingContactFields
    );
    assert_eq!(
        directory.add_contact("Bob", "123").unwrap_err(),
        ValidationError::InvalidPhone
    );

    assert_eq!(directory.contacts(), before.as_slice());
}

/// Suggestions are substring matches in list order, and blank input yields none.
#[test]
fn test_suggest() {
    let directory = sample_directory();

    let names: Vec<&str> = directory.suggest("an").iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Anna", "Anthony"]);

    let names: Vec<&str> = directory.suggest("O").iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Bob", "Anthony"]);

    assert!(directory.suggest("").is_empty());
    assert!(ContactDirectory::new().suggest("").is_empty());
}

#[test]
fn test_find_by_name_case_insensitive() {
    let directory = sample_directory();

    let bob = directory.find_by_name("bob").unwrap();
    assert_eq!(bob.name(), "Bob");
    assert_eq!(bob.phone(), "15550100002");

    assert!(directory.find_by_name("ann").is_none());
}

/// Removing past the end of the list is a silent no-op.
#[test]
fn test_remove_contact_out_of_range() {
    let mut directory = sample_directory();
    let before = directory.contacts().to_vec();

    assert!(directory.remove_contact(directory.len()).is_none());
    assert_eq!(directory.contacts(), before.as_slice());

    let removed = directory.remove_contact(0).unwrap();
    assert_eq!(removed.name(), "Anna");
    assert_eq!(directory.get(0).unwrap().name(), "Bob");
}

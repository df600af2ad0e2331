//! Contact Book Invariant Tests
//!
//! Tests the collection's invariants through the public API:
//! - size never exceeds capacity
//! - names are unique, case-insensitively
//! - phone numbers are unique
//! - listing and search order is alphabetical, case-insensitive
//! - delete compacts while preserving the survivors' order

use rolodex::book::{BookError, Contact, ContactBook};

// =============================================================================
// Test Utilities
// =============================================================================

fn contact(name: &str, phone: i64) -> Contact {
    Contact::new(name, phone, "1 Main St", "test@x.com").unwrap()
}

// =============================================================================
// Capacity
// =============================================================================

/// Every insert below capacity succeeds and grows the book by one;
/// the insert at capacity fails and changes nothing.
#[test]
fn insert_until_capacity_then_full() {
    let mut book = ContactBook::with_capacity(10);

    for i in 0..10 {
        book.insert(contact(&format!("Contact{}", i), i as i64)).unwrap();
        assert_eq!(book.len(), i + 1);
    }

    let err = book.insert(contact("Overflow", 999)).unwrap_err();
    assert_eq!(err, BookError::Full { capacity: 10 });
    assert_eq!(book.len(), 10);
}

// =============================================================================
// Uniqueness
// =============================================================================

/// A name that differs only in case is a duplicate.
#[test]
fn duplicate_name_rejected_case_insensitively() {
    let mut book = ContactBook::new();
    book.insert(contact("Alice Smith", 1)).unwrap();

    for dup in ["alice smith", "ALICE SMITH", "aLiCe SmItH"] {
        let err = book.insert(contact(dup, 100)).unwrap_err();
        assert!(matches!(err, BookError::DuplicateName(_)));
        assert_eq!(book.len(), 1);
    }
}

/// A phone number can belong to only one contact.
#[test]
fn duplicate_phone_rejected() {
    let mut book = ContactBook::new();
    book.insert(contact("Alice", 5551234)).unwrap();

    let err = book.insert(contact("Bob", 5551234)).unwrap_err();
    assert_eq!(err, BookError::DuplicatePhone(5551234));
    assert_eq!(book.len(), 1);
}

// =============================================================================
// Ordering
// =============================================================================

/// list() returns exactly the inserted contacts, sorted by name
/// under ASCII case folding.
#[test]
fn list_returns_all_contacts_sorted() {
    let mut book = ContactBook::new();
    book.insert(contact("dave", 1)).unwrap();
    book.insert(contact("Carol", 2)).unwrap();
    book.insert(contact("bob", 3)).unwrap();
    book.insert(contact("Alice", 4)).unwrap();

    let names: Vec<_> = book
        .list()
        .unwrap()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["Alice", "bob", "Carol", "dave"]);
}

/// The worked example: Bob then Amy inserted, list comes back
/// alphabetical.
#[test]
fn example_scenario_amy_before_bob() {
    let mut book = ContactBook::new();
    book.insert(Contact::new("Bob", 5551234, "1 Main St", "bob@x.com").unwrap())
        .unwrap();
    book.insert(Contact::new("Amy", 5559999, "2 Oak St", "amy@x.com").unwrap())
        .unwrap();

    let names: Vec<_> = book
        .list()
        .unwrap()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["Amy", "Bob"]);
}

/// Search sorts the book as a side effect, so insertion order does
/// not survive it.
#[test]
fn search_sorts_collection_as_side_effect() {
    let mut book = ContactBook::new();
    book.insert(contact("Zoe", 1)).unwrap();
    book.insert(contact("Amy", 2)).unwrap();

    let _ = book.search("no-such-name").unwrap();

    let names: Vec<_> = book.contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Amy", "Zoe"]);
}

// =============================================================================
// Search outcomes
// =============================================================================

/// Empty query, empty book, and zero matches are three distinct
/// outcomes.
#[test]
fn search_outcomes_are_distinct() {
    let mut empty = ContactBook::new();
    assert_eq!(empty.search("x").unwrap_err(), BookError::Empty);

    let mut book = ContactBook::new();
    book.insert(contact("Alice", 1)).unwrap();

    assert_eq!(book.search("").unwrap_err(), BookError::EmptyQuery);
    assert!(book.search("zzz").unwrap().is_empty());
}

/// A case-permuted substring of a stored name matches.
#[test]
fn search_matches_case_permuted_substring() {
    let mut book = ContactBook::new();
    book.insert(contact("Alice Smith", 1)).unwrap();

    let hits = book.search("aLICE").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Alice Smith");

    let hits = book.search("E SM").unwrap();
    assert_eq!(hits.len(), 1);
}

// =============================================================================
// Delete and edit
// =============================================================================

/// [A, B, C] minus B is [A, C]: survivors shift left, order intact.
#[test]
fn delete_compacts_preserving_order() {
    let mut book = ContactBook::new();
    book.insert(contact("A", 1)).unwrap();
    book.insert(contact("B", 2)).unwrap();
    book.insert(contact("C", 3)).unwrap();

    book.delete("B").unwrap();

    let names: Vec<_> = book.contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
    assert_eq!(book.len(), 2);
}

/// Editing a nonexistent name is NotFound and leaves the book as it
/// was.
#[test]
fn edit_missing_name_leaves_book_unchanged() {
    let mut book = ContactBook::new();
    book.insert(contact("Alice", 1)).unwrap();
    let before = book.contacts().to_vec();

    let err = book.edit("Zoe", contact("Replacement", 9)).unwrap_err();
    assert_eq!(err, BookError::NotFound("Zoe".into()));
    assert_eq!(book.contacts(), &before[..]);
}

//! Case-insensitive matching helpers.
//!
//! Case folding here is ASCII-only: 'A'..='Z' fold to lowercase,
//! everything else compares byte-for-byte. That matches the matching
//! and ordering the rest of the book is specified against; Unicode
//! case folding is out of scope.

use std::cmp::Ordering;

/// Returns true if `haystack` contains `needle` as a contiguous
/// substring, ignoring ASCII case.
///
/// An empty needle matches everything. The scan compares byte windows
/// in place and allocates nothing.
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hay = haystack.as_bytes();
    let nee = needle.as_bytes();
    if nee.len() > hay.len() {
        return false;
    }
    hay.windows(nee.len())
        .any(|window| window.eq_ignore_ascii_case(nee))
}

/// Lexicographic comparison of two strings under ASCII case folding.
///
/// This is the book's ordering comparator: "amy" == "AMY", and
/// "Amy" < "bob" regardless of case. Strings differing only in case
/// compare equal, so the ordering is weak.
pub fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|c| c.to_ascii_lowercase());
    let b = b.bytes().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_exact() {
        assert!(contains_ignore_ascii_case("Alice Smith", "Alice"));
        assert!(contains_ignore_ascii_case("Alice Smith", "Smith"));
        assert!(contains_ignore_ascii_case("Alice Smith", "ce Sm"));
    }

    #[test]
    fn test_contains_case_permuted() {
        assert!(contains_ignore_ascii_case("Alice Smith", "aLICE"));
        assert!(contains_ignore_ascii_case("alice smith", "ALICE SMITH"));
        assert!(contains_ignore_ascii_case("ALICE", "lic"));
    }

    #[test]
    fn test_contains_miss() {
        assert!(!contains_ignore_ascii_case("Alice", "Bob"));
        assert!(!contains_ignore_ascii_case("Al", "Alice"));
    }

    #[test]
    fn test_empty_needle_matches() {
        assert!(contains_ignore_ascii_case("anything", ""));
        assert!(contains_ignore_ascii_case("", ""));
    }

    #[test]
    fn test_cmp_folds_case() {
        assert_eq!(cmp_ignore_ascii_case("amy", "AMY"), Ordering::Equal);
        assert_eq!(cmp_ignore_ascii_case("Amy", "bob"), Ordering::Less);
        assert_eq!(cmp_ignore_ascii_case("Bob", "amy"), Ordering::Greater);
    }

    #[test]
    fn test_cmp_prefix_orders_first() {
        assert_eq!(cmp_ignore_ascii_case("Al", "Alice"), Ordering::Less);
    }
}

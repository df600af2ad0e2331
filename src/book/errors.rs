//! Collection-level error types.
//!
//! These are outcomes of book operations, not failures of the
//! program: every one of them is reported to the user and recovered
//! from. Each carries a stable code string for structured logging.

use std::fmt;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// Collection-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A contact with this name already exists (case-insensitive)
    DuplicateName(String),

    /// A contact with this phone number already exists
    DuplicatePhone(i64),

    /// The book is at capacity
    Full { capacity: usize },

    /// No contact with this name exists
    NotFound(String),

    /// The book holds no contacts
    Empty,

    /// The search query was empty
    EmptyQuery,
}

impl BookError {
    /// Stable code string for logging
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "DUPLICATE_NAME",
            Self::DuplicatePhone(_) => "DUPLICATE_PHONE",
            Self::Full { .. } => "BOOK_FULL",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Empty => "BOOK_EMPTY",
            Self::EmptyQuery => "EMPTY_QUERY",
        }
    }
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName(name) => {
                write!(f, "A contact named '{}' already exists", name)
            }
            Self::DuplicatePhone(phone) => {
                write!(f, "A contact with phone number {} already exists", phone)
            }
            Self::Full { capacity } => {
                write!(f, "Contact book is full ({} contacts)", capacity)
            }
            Self::NotFound(name) => {
                write!(f, "No contact found with the name '{}'", name)
            }
            Self::Empty => write!(f, "No contacts in the book"),
            Self::EmptyQuery => write!(f, "No input provided"),
        }
    }
}

impl std::error::Error for BookError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(BookError::DuplicateName("a".into()).code(), "DUPLICATE_NAME");
        assert_eq!(BookError::DuplicatePhone(1).code(), "DUPLICATE_PHONE");
        assert_eq!(BookError::Full { capacity: 100 }.code(), "BOOK_FULL");
        assert_eq!(BookError::NotFound("a".into()).code(), "NOT_FOUND");
        assert_eq!(BookError::Empty.code(), "BOOK_EMPTY");
        assert_eq!(BookError::EmptyQuery.code(), "EMPTY_QUERY");
    }

    #[test]
    fn test_display_names_the_offender() {
        let err = BookError::NotFound("Zoe".into());
        assert!(err.to_string().contains("Zoe"));

        let err = BookError::Full { capacity: 100 };
        assert!(err.to_string().contains("100"));
    }
}

//! The contact record and its field validation rules.

use thiserror::Error;

/// Maximum length of a contact name, in characters.
pub const MAX_NAME_LEN: usize = 29;
/// Maximum length of an address, in characters.
pub const MAX_ADDRESS_LEN: usize = 49;
/// Maximum length of an email address, in characters.
pub const MAX_EMAIL_LEN: usize = 29;

/// Field-level validation errors.
///
/// These fire at construction time: a [`Contact`] that exists is a
/// valid one. Overlong input is rejected outright, never truncated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty
    #[error("Name cannot be empty")]
    EmptyName,

    /// Name exceeds the length bound
    #[error("Name is too long: {len} characters (maximum {MAX_NAME_LEN})")]
    NameTooLong { len: usize },

    /// Phone number is negative
    #[error("Phone number cannot be negative")]
    NegativePhone,

    /// Address exceeds the length bound
    #[error("Address is too long: {len} characters (maximum {MAX_ADDRESS_LEN})")]
    AddressTooLong { len: usize },

    /// Email is empty
    #[error("Email cannot be empty")]
    EmptyEmail,

    /// Email exceeds the length bound
    #[error("Email is too long: {len} characters (maximum {MAX_EMAIL_LEN})")]
    EmailTooLong { len: usize },

    /// Email fails the minimal shape check
    #[error("Invalid email: must contain both '@' and '.'")]
    InvalidEmail,
}

/// A single contact record.
///
/// Four fields: name (unique in a book, case-insensitively), phone
/// (unique in a book), address, and email. Uniqueness is a collection
/// invariant enforced by [`super::ContactBook`]; this type only
/// enforces per-field shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Display name, non-empty, unique within a book
    pub name: String,
    /// Phone number, non-negative, unique within a book
    pub phone: i64,
    /// Free-text address
    pub address: String,
    /// Email address; must contain '@' and '.'
    pub email: String,
}

impl Contact {
    /// Builds a contact, validating every field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty or overlong name,
    /// a negative phone, an overlong address, or an empty, overlong,
    /// or shapeless email. The email check is deliberately minimal:
    /// both `@` and `.` must be present, nothing more.
    pub fn new(
        name: impl Into<String>,
        phone: i64,
        address: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let address = address.into();
        let email = email.into();

        validate_name(&name)?;
        validate_phone(phone)?;
        validate_address(&address)?;
        validate_email(&email)?;

        Ok(Self {
            name,
            phone,
            address,
            email,
        })
    }
}

/// Checks the name bound: non-empty, at most [`MAX_NAME_LEN`] characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong { len });
    }
    Ok(())
}

/// Checks that the phone number is non-negative.
pub fn validate_phone(phone: i64) -> Result<(), ValidationError> {
    if phone < 0 {
        return Err(ValidationError::NegativePhone);
    }
    Ok(())
}

/// Checks the address bound: at most [`MAX_ADDRESS_LEN`] characters.
pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    let len = address.chars().count();
    if len > MAX_ADDRESS_LEN {
        return Err(ValidationError::AddressTooLong { len });
    }
    Ok(())
}

/// Checks the email: non-empty, bounded, contains both '@' and '.'.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    let len = email.chars().count();
    if len > MAX_EMAIL_LEN {
        return Err(ValidationError::EmailTooLong { len });
    }
    if !(email.contains('@') && email.contains('.')) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_contact() {
        let c = Contact::new("Alice Smith", 5551234, "1 Main St", "alice@x.com").unwrap();
        assert_eq!(c.name, "Alice Smith");
        assert_eq!(c.phone, 5551234);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Contact::new("", 1, "addr", "a@b.c").unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn test_overlong_name_rejected_not_truncated() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = Contact::new(long, 1, "addr", "a@b.c").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NameTooLong {
                len: MAX_NAME_LEN + 1
            }
        );
    }

    #[test]
    fn test_name_at_bound_accepted() {
        let name = "x".repeat(MAX_NAME_LEN);
        assert!(Contact::new(name, 1, "addr", "a@b.c").is_ok());
    }

    #[test]
    fn test_negative_phone_rejected() {
        let err = Contact::new("Bob", -1, "addr", "a@b.c").unwrap_err();
        assert_eq!(err, ValidationError::NegativePhone);
    }

    #[test]
    fn test_overlong_address_rejected() {
        let long = "y".repeat(MAX_ADDRESS_LEN + 1);
        let err = Contact::new("Bob", 1, long, "a@b.c").unwrap_err();
        assert!(matches!(err, ValidationError::AddressTooLong { .. }));
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(
            Contact::new("Bob", 1, "addr", "").unwrap_err(),
            ValidationError::EmptyEmail
        );
        assert_eq!(
            Contact::new("Bob", 1, "addr", "no-at-sign.com").unwrap_err(),
            ValidationError::InvalidEmail
        );
        assert_eq!(
            Contact::new("Bob", 1, "addr", "no@dots").unwrap_err(),
            ValidationError::InvalidEmail
        );
        assert!(Contact::new("Bob", 1, "addr", "ok@x.com").is_ok());
    }
}

//! Contact collection management
//!
//! This is the core of the program: a bounded, ordered, in-memory
//! collection of contacts with duplicate-checked insertion,
//! case-insensitive substring search, alphabetical listing, in-place
//! edit, and compacting delete.

mod collection;
mod contact;
mod errors;
pub mod search;

pub use collection::{ContactBook, DEFAULT_CAPACITY};
pub use contact::{
    validate_address, validate_email, validate_name, validate_phone, Contact, ValidationError,
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN,
};
pub use errors::{BookError, BookResult};

//! Flat-file persistence for the contact book
//!
//! The book defines the record format ([`record`]); this module owns
//! the bytes: [`reader`] loads the backing file at startup, [`writer`]
//! rewrites it in full at exit. There is no incremental persistence;
//! every save rewrites the whole file.

mod errors;
pub mod record;
mod reader;
mod writer;

pub use errors::{Severity, StorageError, StorageErrorCode, StorageResult};
pub use reader::{load_contacts, LoadOutcome};
pub use writer::save_contacts;

//! Loading the contacts file at startup.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::book::Contact;

use super::errors::{StorageError, StorageResult};
use super::record;

/// Result of loading the contacts file.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Contacts read from the file, in file order, at most `capacity`
    pub contacts: Vec<Contact>,
    /// Number of records dropped because the file held more than
    /// `capacity` records
    pub truncated: usize,
    /// Whether the backing file existed at all
    pub file_existed: bool,
}

/// Reads every contact from the file at `path`, keeping at most
/// `capacity` records.
///
/// A missing file is not an error: the program starts fresh with an
/// empty book. A file holding more than `capacity` records is
/// truncated to the first `capacity`, with the dropped count reported
/// in the outcome so the caller can warn about it.
///
/// # Errors
///
/// - `ROLO_STORE_READ_FAILED` if the file exists but cannot be read
///   or is not UTF-8
/// - `ROLO_STORE_MALFORMED_RECORD` if the content does not parse as
///   four-line records
pub fn load_contacts(path: &Path, capacity: usize) -> StorageResult<LoadOutcome> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(LoadOutcome {
                contacts: Vec::new(),
                truncated: 0,
                file_existed: false,
            });
        }
        Err(e) => {
            return Err(StorageError::read_failed(
                format!("Failed to read contacts file: {}", path.display()),
                e,
            ));
        }
    };

    let mut contacts = record::parse_contacts(&text)?;

    let truncated = contacts.len().saturating_sub(capacity);
    contacts.truncate(capacity);

    Ok(LoadOutcome {
        contacts,
        truncated,
        file_existed: true,
    })
}

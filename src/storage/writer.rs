//! Writing the contacts file at exit.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::book::Contact;

use super::errors::{StorageError, StorageResult};
use super::record;

/// Rewrites the contacts file in full with the given contacts, in
/// their current order, then fsyncs.
///
/// Every save replaces the entire file; there is no incremental or
/// partial persistence. The fsync is mandatory: a save that is
/// acknowledged must survive the process exiting right after.
///
/// # Errors
///
/// `ROLO_STORE_WRITE_FAILED` if the parent directory cannot be
/// created, or the file cannot be created, written, or synced.
pub fn save_contacts(path: &Path, contacts: &[Contact]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::write_failed(
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    let mut file = File::create(path).map_err(|e| {
        StorageError::write_failed(
            format!("Failed to open contacts file for writing: {}", path.display()),
            e,
        )
    })?;

    let text = record::serialize_contacts(contacts);
    file.write_all(text.as_bytes()).map_err(|e| {
        StorageError::write_failed(
            format!("Failed to write contacts file: {}", path.display()),
            e,
        )
    })?;

    file.sync_all().map_err(|e| {
        StorageError::write_failed(
            format!("fsync failed after writing: {}", path.display()),
            e,
        )
    })?;

    Ok(())
}

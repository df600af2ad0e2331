//! Storage error types.
//!
//! Error codes:
//! - ROLO_STORE_READ_FAILED (ERROR severity)
//! - ROLO_STORE_WRITE_FAILED (ERROR severity)
//! - ROLO_STORE_MALFORMED_RECORD (ERROR severity)
//!
//! Nothing here is fatal: a failed load degrades to an empty book, a
//! failed save is reported to the user before exit.

use std::fmt;
use std::io;

/// Severity levels for storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, program continues
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// Contacts file could not be read
    RoloStoreReadFailed,
    /// Contacts file could not be written
    RoloStoreWriteFailed,
    /// Contacts file content does not parse as four-line records
    RoloStoreMalformedRecord,
}

impl StorageErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            StorageErrorCode::RoloStoreReadFailed => "ROLO_STORE_READ_FAILED",
            StorageErrorCode::RoloStoreWriteFailed => "ROLO_STORE_WRITE_FAILED",
            StorageErrorCode::RoloStoreMalformedRecord => "ROLO_STORE_MALFORMED_RECORD",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            StorageErrorCode::RoloStoreReadFailed
            | StorageErrorCode::RoloStoreWriteFailed
            | StorageErrorCode::RoloStoreMalformedRecord => Severity::Error,
        }
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error with code, message, and optional context
#[derive(Debug)]
pub struct StorageError {
    /// Error code
    code: StorageErrorCode,
    /// Human-readable message
    message: String,
    /// Optional details about the error context
    details: Option<String>,
    /// Underlying IO error if applicable
    source: Option<io::Error>,
}

impl StorageError {
    /// Create a read failure
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::RoloStoreReadFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Create a write failure
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::RoloStoreWriteFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Create a malformed-record error pointing at a record index
    pub fn malformed_record(record_index: usize, reason: impl Into<String>) -> Self {
        Self {
            code: StorageErrorCode::RoloStoreMalformedRecord,
            message: reason.into(),
            details: Some(format!("record_index: {}", record_index)),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StorageErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

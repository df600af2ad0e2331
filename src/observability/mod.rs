//! Structured event logging

mod logger;

pub use logger::{log, Severity};

//! rolodex - a small, deterministic, single-user contact address book
//!
//! The in-memory collection lives in [`book`], the line-oriented file
//! format and its reader/writer in [`storage`], and the interactive
//! menu driver in [`cli`].

pub mod book;
pub mod cli;
pub mod observability;
pub mod storage;

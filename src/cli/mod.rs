//! Menu driver for the contact book
//!
//! Owns everything between the user and the book: clap argument
//! parsing, the JSON config file, the interactive menu loop, and all
//! prompting/validation/re-prompting. The book never touches raw
//! input; by the time it is called, field values are already valid.

mod args;
mod commands;
mod errors;
mod io;

pub use args::Cli;
pub use commands::{run, run_session, Config};
pub use errors::{CliError, CliResult};
pub use io::Console;

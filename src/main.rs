//! Rolodex CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Dispatches to the menu driver (via cli::run)
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure
//!
//! All logic is delegated to the CLI module: main.rs loads no
//! configuration, opens no files, and owns no state.

use rolodex::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

//! CLI argument definitions using clap
//!
//! Usage:
//! - rolodex [--config <path>]
//!
//! Everything else is driven interactively through the menu.

use clap::Parser;
use std::path::PathBuf;

/// Rolodex - a single-user contact address book
#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./rolodex.json")]
    pub config: PathBuf,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

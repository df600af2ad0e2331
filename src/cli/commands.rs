//! Configuration, startup/shutdown sequencing, and the menu loop.
//!
//! Startup: parse args, load config, load contacts (degrading to an
//! empty book if the file is unreadable), run the menu. Shutdown:
//! rewrite the contacts file; a failed save is reported to the user
//! and the process exits non-zero so the data loss is never silent.

use std::fs;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::book::{
    validate_address, validate_email, validate_name, validate_phone, BookError, Contact,
    ContactBook, DEFAULT_CAPACITY,
};
use crate::observability::{log, Severity};
use crate::storage;

use super::errors::{CliError, CliResult};
use super::io::Console;

/// Configuration file structure
///
/// The file is optional; a missing file means pure defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the contacts file (default "./contacts.txt")
    #[serde(default = "default_contacts_path")]
    pub contacts_path: String,

    /// Maximum number of contacts (default 100, must be > 0)
    #[serde(default = "default_max_contacts")]
    pub max_contacts: usize,
}

fn default_contacts_path() -> String {
    "./contacts.txt".to_string()
}

fn default_max_contacts() -> usize {
    DEFAULT_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts_path: default_contacts_path(),
            max_contacts: default_max_contacts(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing file yields the defaults; a present but malformed or
    /// invalid file is a config error.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.max_contacts == 0 {
            return Err(CliError::config_error("max_contacts must be > 0"));
        }
        if self.contacts_path.is_empty() {
            return Err(CliError::config_error("contacts_path must not be empty"));
        }
        Ok(())
    }

    /// Contacts file path as a Path
    pub fn contacts_path(&self) -> &Path {
        Path::new(&self.contacts_path)
    }
}

/// Main CLI entry point
///
/// Parses arguments, loads config, and runs the interactive session
/// on stdin/stdout. This is the only function main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let config = Config::load(&cli.config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&config, stdin.lock(), stdout.lock())
}

/// Runs one interactive session over the given input and output.
///
/// Loads contacts, loops on the menu until the user exits (or input
/// ends), then saves. End of input behaves like choosing Exit, so
/// piped sessions always persist.
pub fn run_session<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> CliResult<()> {
    let mut console = Console::new(input, output);
    let mut book = load_book(config, &mut console)?;

    loop {
        display_menu(&mut console)?;
        let choice = match console.prompt("Enter your choice: ")? {
            Some(choice) => choice,
            None => break,
        };

        match choice.trim().parse::<i64>() {
            Ok(1) => add_contact(&mut book, &mut console)?,
            Ok(2) => list_contacts(&mut book, &mut console)?,
            Ok(3) => search_contacts(&mut book, &mut console)?,
            Ok(4) => edit_contact(&mut book, &mut console)?,
            Ok(5) => delete_contact(&mut book, &mut console)?,
            Ok(0) => break,
            Ok(_) => console.say("Invalid choice! Please enter a valid option.")?,
            Err(_) => console.say("Invalid input! Please enter a number.")?,
        }
    }

    console.say("Exiting the program. Goodbye!")?;
    save_book(config, &book, &mut console)
}

fn display_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<()> {
    console.say("\n\t\t***** Contact Management *****")?;
    console.say("\t\t==============================")?;
    console.say("\t\t[1] Add a New Contact")?;
    console.say("\t\t[2] List All Contacts")?;
    console.say("\t\t[3] Search for a Contact")?;
    console.say("\t\t[4] Edit a Contact")?;
    console.say("\t\t[5] Delete a Contact")?;
    console.say("\t\t[0] Exit")?;
    console.say("\t\t==============================")?;
    Ok(())
}

/// Loads the contact book at startup.
///
/// A missing file starts fresh; an unreadable or malformed file is
/// logged and reported, and the session starts with an empty book
/// rather than aborting. Records the file holds beyond capacity are
/// dropped with a warning, as are records that violate the book's
/// uniqueness invariants.
fn load_book<R: BufRead, W: Write>(
    config: &Config,
    console: &mut Console<R, W>,
) -> CliResult<ContactBook> {
    let mut book = ContactBook::with_capacity(config.max_contacts);

    match storage::load_contacts(config.contacts_path(), config.max_contacts) {
        Ok(outcome) => {
            if !outcome.file_existed {
                console.say("No previous contacts file found. Starting fresh.")?;
                return Ok(book);
            }
            if outcome.truncated > 0 {
                log(
                    Severity::Warn,
                    "CONTACTS_TRUNCATED",
                    &[
                        ("dropped", &outcome.truncated.to_string()),
                        ("capacity", &config.max_contacts.to_string()),
                    ],
                );
            }
            for contact in outcome.contacts {
                let name = contact.name.clone();
                if let Err(e) = book.insert(contact) {
                    log(
                        Severity::Warn,
                        "CONTACT_SKIPPED_ON_LOAD",
                        &[("name", &name), ("code", e.code())],
                    );
                }
            }
            log(
                Severity::Info,
                "CONTACTS_LOADED",
                &[
                    ("count", &book.len().to_string()),
                    ("path", &config.contacts_path),
                ],
            );
        }
        Err(e) => {
            log(
                Severity::Warn,
                "CONTACTS_LOAD_FAILED",
                &[
                    ("error", &e.to_string()),
                    ("path", &config.contacts_path),
                ],
            );
            console.say("Could not read the contacts file. Starting with an empty book.")?;
        }
    }

    Ok(book)
}

/// Saves the book at exit.
///
/// On failure the user is warned and the error propagates so the
/// process exits non-zero; the loss is surfaced, never swallowed.
fn save_book<R: BufRead, W: Write>(
    config: &Config,
    book: &ContactBook,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    match storage::save_contacts(config.contacts_path(), book.contacts()) {
        Ok(()) => {
            console.say("Contacts saved to file.")?;
            log(
                Severity::Info,
                "CONTACTS_SAVED",
                &[
                    ("count", &book.len().to_string()),
                    ("path", &config.contacts_path),
                ],
            );
            Ok(())
        }
        Err(e) => {
            console.say("Warning: contacts could not be saved. Changes from this session are lost.")?;
            log(
                Severity::Error,
                "CONTACTS_SAVE_FAILED",
                &[
                    ("error", &e.to_string()),
                    ("path", &config.contacts_path),
                ],
            );
            Err(CliError::save_failed(e.to_string()))
        }
    }
}

fn add_contact<R: BufRead, W: Write>(
    book: &mut ContactBook,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    if book.len() >= book.capacity() {
        console.say("Contact list is full. Cannot add more contacts.")?;
        return Ok(());
    }

    let name = match prompt_name(console, "Enter contact name: ", Some(book))? {
        Some(name) => name,
        None => return Ok(()),
    };
    let phone = match prompt_phone(console, "Enter phone number: ", Some(book))? {
        Some(phone) => phone,
        None => return Ok(()),
    };
    let address = match prompt_address(console, "Enter address: ")? {
        Some(address) => address,
        None => return Ok(()),
    };
    let email = match prompt_email(console, "Enter email: ")? {
        Some(email) => email,
        None => return Ok(()),
    };

    let contact = match Contact::new(name, phone, address, email) {
        Ok(contact) => contact,
        Err(e) => {
            console.say(&e.to_string())?;
            return Ok(());
        }
    };

    match book.insert(contact) {
        Ok(()) => console.say("Contact added successfully!")?,
        Err(e) => console.say(&e.to_string())?,
    }
    Ok(())
}

fn list_contacts<R: BufRead, W: Write>(
    book: &mut ContactBook,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    match book.list() {
        Ok(contacts) => {
            let rows: Vec<String> = contacts
                .iter()
                .map(|c| {
                    format!(
                        "{:<30} {:<15} {:<50} {}",
                        c.name, c.phone, c.address, c.email
                    )
                })
                .collect();

            console.say("\n\t\t*** List of Contacts ***")?;
            console.say("==================================================")?;
            console.say(&format!(
                "{:<30} {:<15} {:<50} {}",
                "Name", "Phone", "Address", "Email"
            ))?;
            console.say("==================================================")?;
            for row in rows {
                console.say(&row)?;
            }
        }
        Err(BookError::Empty) => console.say("No contacts to display.")?,
        Err(e) => console.say(&e.to_string())?,
    }
    Ok(())
}

fn search_contacts<R: BufRead, W: Write>(
    book: &mut ContactBook,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    if book.is_empty() {
        console.say("No contacts to search.")?;
        return Ok(());
    }

    let query = match console.prompt("Please enter the contact's name: ")? {
        Some(query) => query,
        None => return Ok(()),
    };

    match book.search(&query) {
        Ok(matches) if matches.is_empty() => {
            console.say(&format!("No contact found containing '{}'.", query))?;
        }
        Ok(matches) => {
            let rendered: Vec<String> = matches
                .iter()
                .map(|c| {
                    format!(
                        "Name: {}\nPhone: {}\nAddress: {}\nEmail: {}\n",
                        c.name, c.phone, c.address, c.email
                    )
                })
                .collect();

            console.say(&format!("\nContacts matching '{}':", query))?;
            for entry in rendered {
                console.say(&entry)?;
            }
        }
        Err(BookError::EmptyQuery) => console.say("No input provided. Returning.")?,
        Err(e) => console.say(&e.to_string())?,
    }
    Ok(())
}

fn edit_contact<R: BufRead, W: Write>(
    book: &mut ContactBook,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let name = match console.prompt("Enter the name of the contact to edit: ")? {
        Some(name) => name,
        None => return Ok(()),
    };

    let stored_name = match book
        .contacts()
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(&name))
    {
        Some(contact) => contact.name.clone(),
        None => {
            console.say(&format!("No contact found with the name '{}'.", name))?;
            return Ok(());
        }
    };
    console.say(&format!("Editing contact '{}'", stored_name))?;

    // Replacement fields go through the same shape checks as an add,
    // but deliberately NOT through the duplicate checks; an edit can
    // collide with another contact's name or phone. See DESIGN.md.
    let new_name = match prompt_name(console, "New Name: ", None)? {
        Some(new_name) => new_name,
        None => return Ok(()),
    };
    let new_phone = match prompt_phone(console, "New Phone: ", None)? {
        Some(new_phone) => new_phone,
        None => return Ok(()),
    };
    let new_address = match prompt_address(console, "New Address: ")? {
        Some(new_address) => new_address,
        None => return Ok(()),
    };
    let new_email = match prompt_email(console, "New Email: ")? {
        Some(new_email) => new_email,
        None => return Ok(()),
    };

    let replacement = match Contact::new(new_name, new_phone, new_address, new_email) {
        Ok(replacement) => replacement,
        Err(e) => {
            console.say(&e.to_string())?;
            return Ok(());
        }
    };

    match book.edit(&name, replacement) {
        Ok(()) => console.say("Contact updated successfully!")?,
        Err(e) => console.say(&e.to_string())?,
    }
    Ok(())
}

fn delete_contact<R: BufRead, W: Write>(
    book: &mut ContactBook,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let name = match console.prompt("Enter the name of the contact to delete: ")? {
        Some(name) => name,
        None => return Ok(()),
    };

    match book.delete(&name) {
        Ok(_) => console.say("Contact deleted successfully.")?,
        Err(_) => console.say(&format!("No contact found with the name '{}'.", name))?,
    }
    Ok(())
}

/// Prompts for a name until it passes the shape checks and, when a
/// book is given, is not already taken (case-insensitive).
fn prompt_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
    duplicates_in: Option<&ContactBook>,
) -> CliResult<Option<String>> {
    loop {
        let line = match console.prompt(label)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if let Err(e) = validate_name(&line) {
            console.say(&e.to_string())?;
            continue;
        }
        if let Some(book) = duplicates_in {
            if book.contains_name(&line) {
                console.say("A contact with this name already exists. Please enter a new name.")?;
                continue;
            }
        }
        return Ok(Some(line));
    }
}

/// Prompts for a phone number until it parses, is non-negative and,
/// when a book is given, is not already taken.
fn prompt_phone<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
    duplicates_in: Option<&ContactBook>,
) -> CliResult<Option<i64>> {
    loop {
        let line = match console.prompt(label)? {
            Some(line) => line,
            None => return Ok(None),
        };
        let phone: i64 = match line.trim().parse() {
            Ok(phone) => phone,
            Err(_) => {
                console.say("Invalid input, please enter a valid phone number.")?;
                continue;
            }
        };
        if validate_phone(phone).is_err() {
            console.say("Phone number can only have positive numbers!")?;
            continue;
        }
        if let Some(book) = duplicates_in {
            if book.contains_phone(phone) {
                console.say("This phone number already exists, please try again.")?;
                continue;
            }
        }
        return Ok(Some(phone));
    }
}

fn prompt_address<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> CliResult<Option<String>> {
    loop {
        let line = match console.prompt(label)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if let Err(e) = validate_address(&line) {
            console.say(&e.to_string())?;
            continue;
        }
        return Ok(Some(line));
    }
}

fn prompt_email<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> CliResult<Option<String>> {
    loop {
        let line = match console.prompt(label)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if let Err(e) = validate_email(&line) {
            console.say(&e.to_string())?;
            continue;
        }
        return Ok(Some(line));
    }
}

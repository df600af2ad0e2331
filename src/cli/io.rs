//! Console I/O for the menu driver.
//!
//! Generic over the reader and writer so test code can script a whole
//! session from a string and capture everything printed.

use std::io::{BufRead, Write};

use super::errors::CliResult;

/// Line-oriented console wrapper around an input and an output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader/writer pair.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one line to the output.
    pub fn say(&mut self, message: &str) -> CliResult<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints a prompt (no newline), flushes, and reads one line.
    ///
    /// Returns `None` at end of input. The returned line has its
    /// trailing newline removed but is otherwise untrimmed.
    pub fn prompt(&mut self, message: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        Ok(Some(line.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_newline_only() {
        let input = Cursor::new("  Alice \n");
        let mut console = Console::new(input, Vec::new());
        let line = console.prompt("> ").unwrap().unwrap();
        // Interior/leading whitespace is the caller's business.
        assert_eq!(line, "  Alice ");
    }

    #[test]
    fn test_prompt_handles_crlf() {
        let input = Cursor::new("Bob\r\n");
        let mut console = Console::new(input, Vec::new());
        assert_eq!(console.prompt("> ").unwrap().unwrap(), "Bob");
    }

    #[test]
    fn test_prompt_returns_none_at_eof() {
        let input = Cursor::new("");
        let mut console = Console::new(input, Vec::new());
        assert!(console.prompt("> ").unwrap().is_none());
    }

    #[test]
    fn test_prompt_writes_prompt_without_newline() {
        let input = Cursor::new("x\n");
        let mut console = Console::new(input, Vec::new());
        console.prompt("Enter choice: ").unwrap();
        console.say("done").unwrap();
        let output = String::from_utf8(console.output).unwrap();
        assert!(output.starts_with("Enter choice: done\n"));
    }
}

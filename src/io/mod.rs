//! Input/output abstractions
//!
//! Provides traits for input and output operations, enabling testing
//! by allowing mock implementations.

use std::io::{self, Write};

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user. The prompt is written
    /// verbatim, without a trailing newline, so input is typed on the
    /// same line.
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            // Closed stdin would otherwise spin on the prompt forever.
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

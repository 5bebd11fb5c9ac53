//! Interactive prompt utilities
//!
//! Reads a single line of free-text input and forwards it verbatim.

use crate::error::{Result, TaskError};
use std::io::{BufRead, Write};

/// Prompt on stdout and read one line from stdin.
///
/// Only the trailing line terminator is stripped; everything else, including
/// leading/trailing spaces and the empty string, is forwarded unchanged.
pub fn read_line(prompt: &str) -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{prompt}").map_err(|e| TaskError::input("Failed to write prompt", e))?;
    stdout
        .flush()
        .map_err(|e| TaskError::input("Failed to flush prompt", e))?;

    read_line_from(&mut std::io::stdin().lock())
}

fn read_line_from<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| TaskError::input("Failed to read input", e))?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

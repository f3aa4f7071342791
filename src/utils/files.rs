//! File helpers for reading tables and persisting rendered sentences
//!
//! Every helper attaches the offending path to its error so the CLI can
//! report it without further context.

use std::fs;
use std::path::Path;

use super::error::{ConversionError, ConversionResult};

/// Read a whole input file into memory
pub fn read_input(path: impl AsRef<Path>) -> ConversionResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| ConversionError::io(path, e))
}

/// Join lines with `\n` and write them to `path`
///
/// No trailing newline is appended, so an empty slice produces an empty file.
pub fn write_lines(path: impl AsRef<Path>, lines: &[String]) -> ConversionResult<()> {
    let path = path.as_ref();
    fs::write(path, lines.join("\n")).map_err(|e| ConversionError::io(path, e))
}

/// Write raw text to `path`, creating parent directories as needed
pub fn write_text(path: impl AsRef<Path>, text: &str) -> ConversionResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ConversionError::io(parent, e))?;
        }
    }
    fs::write(path, text).map_err(|e| ConversionError::io(path, e))
}

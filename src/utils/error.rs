//! Error handling for nlt conversions
//!
//! This module provides a unified error type and result type for all
//! conversion operations, plus the non-fatal warning type used when a
//! configured variant name has to be replaced by its default.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conversion error type
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Input file could not be parsed as the selected format
    #[error("Parse error in {format} input: {message}")]
    ParseError { format: String, message: String },

    /// Grid or argument violates a precondition
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Config document could not be read or decoded
    #[error("Config error: {message}")]
    Config { message: String },

    /// IO error (for file operations)
    #[error("IO error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Strict lookup of a formatter or parser name failed
    #[error("Unknown {kind} '{name}'")]
    UnknownVariant { kind: &'static str, name: String },
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn parse(format: impl Into<String>, message: impl fmt::Display) -> Self {
        ConversionError::ParseError {
            format: format.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl fmt::Display) -> Self {
        ConversionError::Config {
            message: message.to_string(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ConversionError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        ConversionError::UnknownVariant {
            kind,
            name: name.into(),
        }
    }
}

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    pub message: String,
    pub suggestion: Option<String>,
}

impl ConversionWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Warning for an unrecognized variant name that was replaced by `default`
    pub fn fallback(kind: &str, name: &str, default: &str) -> Self {
        Self::new(format!(
            "Invalid {} '{}' provided, defaulting to {}",
            kind, name, default
        ))
        .with_suggestion(format!("run `nlt list` to see the available {}s", kind))
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning: {}", self.message)?;
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOutput {
    /// One rendered sentence per entry
    pub lines: Vec<String>,
    /// Any warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(lines: Vec<String>, warnings: Vec<ConversionWarning>) -> Self {
        Self { lines, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Newline-joined text, as written to the output file
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - File reading and writing

pub mod error;
pub mod files;

// Re-export commonly used items
pub use error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};
pub use files::{read_input, write_lines, write_text};

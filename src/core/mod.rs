//! Core conversion modules
//!
//! This module contains the table-to-sentence pipeline:
//! - `grid`: validated rectangular input
//! - `table`: header partitioning into annotated cells
//! - `fields`: phrase fragments supplied per render call
//! - `formatter`: the twelve sentence strategies and custom templates

pub mod fields;
pub mod formatter;
pub mod grid;
pub mod table;

// Re-export main types and functions
pub use fields::FormatFields;
pub use formatter::{collapse_spaces, render_cell, CustomTemplate, FormatterKind, PLACEHOLDERS};
pub use grid::Grid;
pub use table::{build_table, Cell, Table};

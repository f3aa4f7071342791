//! Markdown pipe-table reader
//!
//! Only the first table of the document is read. Inline markup inside a
//! cell is flattened to its text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::core::grid::Grid;
use crate::utils::error::{ConversionError, ConversionResult};

/// Read the first GitHub-style table in `input`
pub fn parse_markdown(input: &str) -> ConversionResult<Grid> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_cell = false;
    let mut found = false;

    for event in Parser::new_ext(input, Options::ENABLE_TABLES) {
        match event {
            Event::Start(Tag::Table(_)) => found = true,
            Event::End(TagEnd::Table) => break,
            // Header cells sit directly under TableHead, without a TableRow
            Event::Start(Tag::TableHead) | Event::Start(Tag::TableRow) => row.clear(),
            Event::End(TagEnd::TableHead) | Event::End(TagEnd::TableRow) => {
                rows.push(std::mem::take(&mut row));
            }
            Event::Start(Tag::TableCell) => {
                cell.clear();
                in_cell = true;
            }
            Event::End(TagEnd::TableCell) => {
                row.push(cell.trim().to_string());
                in_cell = false;
            }
            Event::Text(text) | Event::Code(text) if in_cell => cell.push_str(&text),
            Event::SoftBreak | Event::HardBreak if in_cell => cell.push(' '),
            _ => {}
        }
    }

    if !found {
        return Err(ConversionError::parse("MD", "no table found in document"));
    }
    Grid::new(rows)
}

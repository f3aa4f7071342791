//! Table readers
//!
//! Each reader turns file content into a [`Grid`] of strings. No type
//! inference happens: numbers, booleans and dates stay as their text. The
//! first grid row is the source's header row (CSV first line, JSON keys,
//! Markdown/HTML header cells), so header depths count it like any other row.

mod delimited;
mod html;
mod json;
mod markdown;

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::core::grid::Grid;
use crate::utils::error::{ConversionError, ConversionResult, ConversionWarning};

pub use delimited::{parse_csv, parse_tsv};
pub use html::parse_html;
pub use json::{parse_json_arr_arr, parse_json_arr_obj, parse_json_lines};
pub use markdown::parse_markdown;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParserKind {
    /// Comma separated values
    #[default]
    Csv,
    /// Tab separated values
    Tsv,
    /// One JSON object per line
    JsonLines,
    /// A JSON array of objects
    JsonArrObj,
    /// A JSON array of arrays
    JsonArrArr,
    /// The first pipe table of a Markdown document
    Markdown,
    /// The first `<table>` of an HTML document
    Html,
}

impl ParserKind {
    pub const ALL: [ParserKind; 7] = [
        ParserKind::Csv,
        ParserKind::Tsv,
        ParserKind::JsonLines,
        ParserKind::JsonArrObj,
        ParserKind::JsonArrArr,
        ParserKind::Markdown,
        ParserKind::Html,
    ];

    /// Config name
    pub fn name(&self) -> &'static str {
        match self {
            ParserKind::Csv => "CSV",
            ParserKind::Tsv => "TSV",
            ParserKind::JsonLines => "JSONLines",
            ParserKind::JsonArrObj => "JSONArrObj",
            ParserKind::JsonArrArr => "JSONArrArr",
            ParserKind::Markdown => "MD",
            ParserKind::Html => "HTML",
        }
    }

    /// Look a parser up by exact name, substituting CSV on a miss
    pub fn resolve(name: &str) -> (Self, Option<ConversionWarning>) {
        match name.parse() {
            Ok(kind) => (kind, None),
            Err(_) => {
                let fallback = Self::default();
                warn!(
                    requested = name,
                    fallback = fallback.name(),
                    "invalid parser provided, using default"
                );
                let warning = ConversionWarning::fallback("parser", name, fallback.name());
                (fallback, Some(warning))
            }
        }
    }

    /// Read `input` into a grid
    pub fn parse(&self, input: &str) -> ConversionResult<Grid> {
        let grid = match self {
            ParserKind::Csv => parse_csv(input),
            ParserKind::Tsv => parse_tsv(input),
            ParserKind::JsonLines => parse_json_lines(input),
            ParserKind::JsonArrObj => parse_json_arr_obj(input),
            ParserKind::JsonArrArr => parse_json_arr_arr(input),
            ParserKind::Markdown => parse_markdown(input),
            ParserKind::Html => parse_html(input),
        }?;
        debug!(
            parser = self.name(),
            rows = grid.height(),
            columns = grid.width(),
            "parsed table"
        );
        Ok(grid)
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParserKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParserKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConversionError::unknown("parser", s))
    }
}

//! # nlt
//!
//! Reformat tabular data into natural-language sentences.
//!
//! ## Features
//!
//! - **Readers**: CSV, TSV, JSON lines, JSON arrays of objects or arrays,
//!   Markdown pipe tables and HTML tables
//! - **Header partitioning**: any number of leading rows and columns can act
//!   as headers, accumulated per cell
//! - **Twelve formatters**: per-cell coordinate and named sentences, plus
//!   grouped key/value and value-list lines
//! - **Custom templates**: per-cell sentences from your own placeholders
//! - **Config files**: JSON, TOML or YAML, with a `lastrun.json` snapshot
//!
//! ## Usage Examples
//!
//! ### From a grid
//!
//! ```rust
//! use nlt::{build_table, FormatFields, FormatterKind, Grid};
//!
//! let grid = Grid::from_rows([["_", "col1"], ["row1", "val11"]]).unwrap();
//! let table = build_table(&grid, 1, 1);
//! let lines = FormatterKind::UnnamedCoord1.format(&table, &FormatFields::new());
//! assert_eq!(lines[3], "row1 and col1 val11");
//! ```
//!
//! ### From file content and a config
//!
//! ```rust
//! use nlt::{convert_str, RunConfig};
//!
//! let config: RunConfig = serde_json::from_str(r#"{
//!     "parser": "CSV",
//!     "formatter": "NamedRow",
//!     "row_headers": 1,
//!     "col_headers": 1,
//!     "link": "If",
//!     "x_label": "chain",
//!     "eq": "is"
//! }"#).unwrap();
//!
//! let output = convert_str("chain,size\nSbarro,small\n", &config).unwrap();
//! assert_eq!(output.lines[3], "If chain is Sbarro, size is small");
//! ```

/// Grid, table partitioning and formatters
pub mod core;

/// Input format readers
pub mod parsers;

/// Config documents and the lastrun snapshot
pub mod config;

/// Utility modules
pub mod utils;

use tracing::{debug, info};

// Re-export core types
pub use core::{
    build_table, collapse_spaces, render_cell, Cell, CustomTemplate, FormatFields, FormatterKind,
    Grid, Table, PLACEHOLDERS,
};

pub use config::{ConfigFields, ConfigFormat, RunConfig, DEFAULT_CONFIG_PATH, LASTRUN_PATH};
pub use parsers::ParserKind;

// Re-export utilities
pub use utils::error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};
pub use utils::files;

/// Partition `grid` with the configured header depths and render it
///
/// A `template` in the config takes precedence over `formatter`. Unknown
/// formatter names and unknown template placeholders are reported as
/// warnings, never as errors.
pub fn convert_grid(grid: &Grid, config: &RunConfig) -> ConversionOutput {
    let mut warnings = Vec::new();
    let table = build_table(grid, config.config.row_headers, config.config.col_headers);

    let lines = match config.custom_template() {
        Some(template) => {
            for name in template.unknown_placeholders() {
                let message = format!("Unknown placeholder '{{{}}}' in template", name);
                let known = format!("known placeholders: {}", PLACEHOLDERS.join(", "));
                warnings.push(ConversionWarning::new(message).with_suggestion(known));
            }
            debug!(template = template.as_str(), "using custom template");
            template.format(&table, &config.fields)
        }
        None => {
            let (formatter, warning) = config.formatter();
            warnings.extend(warning);
            formatter.format(&table, &config.fields)
        }
    };

    ConversionOutput::with_warnings(lines, warnings)
}

/// Parse `input` with the configured parser, then [`convert_grid`]
pub fn convert_str(input: &str, config: &RunConfig) -> ConversionResult<ConversionOutput> {
    let (parser, warning) = config.parser();
    let grid = parser.parse(input)?;
    let mut output = convert_grid(&grid, config);
    if let Some(warning) = warning {
        output.warnings.insert(0, warning);
    }
    Ok(output)
}

/// Read the configured input file and convert it
///
/// Writing the result is left to the caller, see [`files::write_lines`].
pub fn run(config: &RunConfig) -> ConversionResult<ConversionOutput> {
    let input = files::read_input(&config.config.infile)?;
    info!(infile = %config.config.infile, "table read");
    let output = convert_str(&input, config)?;
    info!(lines = output.lines.len(), "table reformatted to natural language");
    Ok(output)
}

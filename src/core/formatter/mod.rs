//! Sentence formatters
//!
//! Twelve fixed strategies turn a [`Table`] into natural-language lines:
//!
//! - six per-cell templates (one collapsed line per cell, cell order);
//! - six grouped variants (one line per distinct header key, first-seen order).
//!
//! # Example
//!
//! ```rust
//! use nlt::{build_table, FormatFields, FormatterKind, Grid};
//!
//! let grid = Grid::from_rows([["topping", "vegan"], ["meat", "false"]]).unwrap();
//! let table = build_table(&grid, 1, 1);
//! let fields = FormatFields::new().with_link("If").with_x_label("topping").with_eq("is");
//! let lines = FormatterKind::NamedRow.format(&table, &fields);
//! assert_eq!(lines[3], "If topping is meat, vegan is false");
//! ```

mod grouped;
mod template;


use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::core::fields::FormatFields;
use crate::core::table::Table;
use crate::utils::error::{ConversionError, ConversionWarning};

use grouped::format_groups;
pub use template::{collapse_spaces, render_cell, CustomTemplate, PLACEHOLDERS};

/// The twelve built-in sentence strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatterKind {
    /// `{val_label} {link} {x_head} and {y_head} {eq} {value}`
    #[default]
    UnnamedCoord1,
    /// `{link} {x_head} and {y_head} {val_label} {eq} {value}`
    UnnamedCoord2,
    /// `{val_label} {link} {x_label} {eq} {x_head} and {y_label} {eq} {y_head} {eq} {value}`
    NamedCoord1,
    /// `{link} {x_label} {eq} {x_head} and {y_label} {eq} {y_head}, {val_label} {eq} {value}`
    NamedCoord2,
    /// `{link} {x_label} {eq} {x_head}, {y_head} {eq} {value}`
    NamedRow,
    /// `{link} {y_label} {eq} {y_head}, {x_head} {eq} {value}`
    NamedCol,
    /// `{link} {x_head}, [{y_head} {eq} {value}, ...]`
    UnnamedRowKeyVal,
    /// `{link} {y_head}, [{x_head} {eq} {value}, ...]`
    UnnamedColKeyVal,
    /// `{link} {x_label} {eq} {x_head}, [{y_head} {eq} {value}, ...]`
    NamedRowKeyVal,
    /// `{link} {y_label} {eq} {y_head}, [{x_head} {eq} {value}, ...]`
    NamedColKeyVal,
    /// `{pre} {x_head} {link} [{value}, ...]`
    RowVal,
    /// `{pre} {y_head} {link} [{value}, ...]`
    ColVal,
}

impl FormatterKind {
    /// Every variant, in documentation order
    pub const ALL: [FormatterKind; 12] = [
        FormatterKind::UnnamedCoord1,
        FormatterKind::UnnamedCoord2,
        FormatterKind::NamedCoord1,
        FormatterKind::NamedCoord2,
        FormatterKind::NamedRow,
        FormatterKind::NamedCol,
        FormatterKind::UnnamedRowKeyVal,
        FormatterKind::UnnamedColKeyVal,
        FormatterKind::NamedRowKeyVal,
        FormatterKind::NamedColKeyVal,
        FormatterKind::RowVal,
        FormatterKind::ColVal,
    ];

    /// Canonical config name
    pub fn name(&self) -> &'static str {
        match self {
            FormatterKind::UnnamedCoord1 => "UnnamedCoord1",
            FormatterKind::UnnamedCoord2 => "UnnamedCoord2",
            FormatterKind::NamedCoord1 => "NamedCoord1",
            FormatterKind::NamedCoord2 => "NamedCoord2",
            FormatterKind::NamedRow => "NamedRow",
            FormatterKind::NamedCol => "NamedCol",
            FormatterKind::UnnamedRowKeyVal => "UnnamedRowKeyVal",
            FormatterKind::UnnamedColKeyVal => "UnnamedColKeyVal",
            FormatterKind::NamedRowKeyVal => "NamedRowKeyVal",
            FormatterKind::NamedColKeyVal => "NamedColKeyVal",
            FormatterKind::RowVal => "RowVal",
            FormatterKind::ColVal => "ColVal",
        }
    }

    /// Older config files spell names with a `Formatter` suffix
    /// (`UnnamedCoordFormatter1`, `RowValFormatter`)
    pub fn legacy_name(&self) -> String {
        let name = self.name();
        match name.strip_suffix(|c: char| c.is_ascii_digit()) {
            Some(stem) => format!("{}Formatter{}", stem, &name[stem.len()..]),
            None => format!("{}Formatter", name),
        }
    }

    /// Whether the variant emits one line per group rather than per cell
    pub fn is_grouped(&self) -> bool {
        matches!(
            self,
            FormatterKind::UnnamedRowKeyVal
                | FormatterKind::UnnamedColKeyVal
                | FormatterKind::NamedRowKeyVal
                | FormatterKind::NamedColKeyVal
                | FormatterKind::RowVal
                | FormatterKind::ColVal
        )
    }

    /// Look a variant up by exact name, substituting the default on a miss
    ///
    /// The warning is also emitted as a `tracing` event.
    pub fn resolve(name: &str) -> (Self, Option<ConversionWarning>) {
        match name.parse() {
            Ok(kind) => (kind, None),
            Err(_) => {
                let fallback = Self::default();
                warn!(
                    requested = name,
                    fallback = fallback.name(),
                    "invalid formatter provided, using default"
                );
                let warning = ConversionWarning::fallback("formatter", name, fallback.name());
                (fallback, Some(warning))
            }
        }
    }

    /// Exact lookup that fails instead of falling back
    pub fn from_name_strict(name: &str) -> Result<Self, ConversionError> {
        name.parse()
    }

    /// Sentence shape, as shown by `nlt list`
    pub fn shape(&self) -> &'static str {
        match self {
            FormatterKind::UnnamedCoord1 => template::UNNAMED_COORD_1,
            FormatterKind::UnnamedCoord2 => template::UNNAMED_COORD_2,
            FormatterKind::NamedCoord1 => template::NAMED_COORD_1,
            FormatterKind::NamedCoord2 => template::NAMED_COORD_2,
            FormatterKind::NamedRow => template::NAMED_ROW,
            FormatterKind::NamedCol => template::NAMED_COL,
            FormatterKind::UnnamedRowKeyVal => "{link} {x_head}, [{y_head} {eq} {value}, ...]",
            FormatterKind::UnnamedColKeyVal => "{link} {y_head}, [{x_head} {eq} {value}, ...]",
            FormatterKind::NamedRowKeyVal => {
                "{link} {x_label} {eq} {x_head}, [{y_head} {eq} {value}, ...]"
            }
            FormatterKind::NamedColKeyVal => {
                "{link} {y_label} {eq} {y_head}, [{x_head} {eq} {value}, ...]"
            }
            FormatterKind::RowVal => "{pre} {x_head} {link} [{value}, ...]",
            FormatterKind::ColVal => "{pre} {y_head} {link} [{value}, ...]",
        }
    }

    /// Render `table` into sentences
    pub fn format(&self, table: &Table, fields: &FormatFields) -> Vec<String> {
        let lines = match self {
            FormatterKind::UnnamedCoord1 => {
                template::format_cells(table, fields, template::UNNAMED_COORD_1)
            }
            FormatterKind::UnnamedCoord2 => {
                template::format_cells(table, fields, template::UNNAMED_COORD_2)
            }
            FormatterKind::NamedCoord1 => {
                template::format_cells(table, fields, template::NAMED_COORD_1)
            }
            FormatterKind::NamedCoord2 => {
                template::format_cells(table, fields, template::NAMED_COORD_2)
            }
            FormatterKind::NamedRow => template::format_cells(table, fields, template::NAMED_ROW),
            FormatterKind::NamedCol => template::format_cells(table, fields, template::NAMED_COL),
            FormatterKind::UnnamedRowKeyVal => {
                format_groups(table, fields, ", ", grouped::unnamed_row_key_val)
            }
            FormatterKind::UnnamedColKeyVal => {
                format_groups(table, fields, ", ", grouped::unnamed_col_key_val)
            }
            FormatterKind::NamedRowKeyVal => {
                format_groups(table, fields, ", ", grouped::named_row_key_val)
            }
            FormatterKind::NamedColKeyVal => {
                format_groups(table, fields, ", ", grouped::named_col_key_val)
            }
            FormatterKind::RowVal => format_groups(table, fields, " ", grouped::row_val),
            FormatterKind::ColVal => format_groups(table, fields, " ", grouped::col_val),
        };
        debug!(
            formatter = self.name(),
            cells = table.cells().len(),
            lines = lines.len(),
            "formatted table"
        );
        lines
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatterKind {
    type Err = ConversionError;

    /// Exact, case-sensitive match on the canonical or legacy name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.legacy_name() == s)
            .ok_or_else(|| ConversionError::unknown("formatter", s))
    }
}

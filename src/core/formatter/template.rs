//! Per-cell sentence templates
//!
//! A template is plain text with `{placeholder}` slots. Substitution is a
//! single pass, so a cell value that happens to contain `{value}` is copied
//! verbatim instead of being expanded again.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::core::fields::FormatFields;
use crate::core::table::{Cell, Table};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([a-z_]+)\}").unwrap();
    static ref SPACE_RUN: Regex = Regex::new(r" {2,}").unwrap();
}

/// Placeholders understood by [`render_cell`]
pub const PLACEHOLDERS: [&str; 9] = [
    "val_label",
    "link",
    "eq",
    "pre",
    "x_label",
    "y_label",
    "x_head",
    "y_head",
    "value",
];

// Example: price for extra pepperoni and no cheese is $12.00
pub(crate) const UNNAMED_COORD_1: &str = "{val_label} {link} {x_head} and {y_head} {eq} {value}";
// Example: For extra pepperoni and no cheese, price will be $12.00
pub(crate) const UNNAMED_COORD_2: &str = "{link} {x_head} and {y_head} {val_label} {eq} {value}";
// Example: Price when size is medium and crust is thin is $15
pub(crate) const NAMED_COORD_1: &str =
    "{val_label} {link} {x_label} {eq} {x_head} and {y_label} {eq} {y_head} {eq} {value}";
// Example: When size = medium and crust = thin, price = $15
pub(crate) const NAMED_COORD_2: &str =
    "{link} {x_label} {eq} {x_head} and {y_label} {eq} {y_head}, {val_label} {eq} {value}";
// Example: If topping is meat, vegan is false
pub(crate) const NAMED_ROW: &str = "{link} {x_label} {eq} {x_head}, {y_head} {eq} {value}";
// Example: If crust is gluten free, price increases by $3
pub(crate) const NAMED_COL: &str = "{link} {y_label} {eq} {y_head}, {x_head} {eq} {value}";

/// Collapse every run of spaces into a single space and trim the ends
///
/// Empty fragments leave gaps like `"  and  "`; this closes them. Applying
/// it twice gives the same result as applying it once.
pub fn collapse_spaces(line: &str) -> String {
    SPACE_RUN.replace_all(line, " ").trim().to_string()
}

/// Fill one template for one cell, then collapse spaces
pub fn render_cell(template: &str, cell: &Cell, fields: &FormatFields) -> String {
    let (x_head, y_head) = cell.join_headers(&fields.delim);
    let line = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        match &caps[1] {
            "val_label" => fields.val_label.clone(),
            "link" => fields.link.clone(),
            "eq" => fields.eq.clone(),
            "pre" => fields.pre.clone(),
            "x_label" => fields.x_label.clone(),
            "y_label" => fields.y_label.clone(),
            "x_head" => x_head.clone(),
            "y_head" => y_head.clone(),
            "value" => cell.value.clone(),
            _ => caps[0].to_string(),
        }
    });
    collapse_spaces(&line)
}

/// Render every cell of `table` with `template`, in cell order
pub(crate) fn format_cells(table: &Table, fields: &FormatFields, template: &str) -> Vec<String> {
    table
        .cells()
        .iter()
        .map(|cell| render_cell(template, cell, fields))
        .collect()
}

/// A user-supplied per-cell template
///
/// ```rust
/// use nlt::{build_table, CustomTemplate, FormatFields, Grid};
///
/// let grid = Grid::from_rows([["size", "price"], ["small", "$10"]]).unwrap();
/// let table = build_table(&grid, 1, 1);
/// let template = CustomTemplate::new("a {x_head} pizza {eq} {value}");
/// let lines = template.format(&table, &FormatFields::new().with_eq("costs"));
/// assert_eq!(lines[3], "a small pizza costs $10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTemplate {
    template: String,
}

impl CustomTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Placeholders in the template that [`render_cell`] does not know
    ///
    /// Unknown placeholders are copied to the output unchanged.
    pub fn unknown_placeholders(&self) -> Vec<String> {
        PLACEHOLDER
            .captures_iter(&self.template)
            .map(|caps| caps[1].to_string())
            .filter(|name| !PLACEHOLDERS.contains(&name.as_str()))
            .collect()
    }

    pub fn format(&self, table: &Table, fields: &FormatFields) -> Vec<String> {
        format_cells(table, fields, &self.template)
    }
}

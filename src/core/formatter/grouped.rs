//! Grouped key-value formatters
//!
//! Cells are clustered under a header-derived key and each key becomes one
//! line. Keys keep the order in which they were first seen. Unlike the
//! per-cell templates, these lines are not space-collapsed, so empty
//! fragments show up as doubled spaces.

use indexmap::IndexMap;

use crate::core::fields::FormatFields;
use crate::core::table::Table;

/// Joined headers and value of one cell, as handed to a grouping rule
pub(crate) struct CellText<'a> {
    pub x_head: String,
    pub y_head: String,
    pub value: &'a str,
}

/// Group cells by the key `rule` computes and join each group's items
///
/// `rule` returns `(key, item)` for a cell. The output line is
/// `key + separator + items.join(", ")`.
pub(crate) fn format_groups<F>(
    table: &Table,
    fields: &FormatFields,
    separator: &str,
    rule: F,
) -> Vec<String>
where
    F: Fn(&CellText<'_>, &FormatFields) -> (String, String),
{
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for cell in table.cells() {
        let (x_head, y_head) = cell.join_headers(&fields.delim);
        let text = CellText {
            x_head,
            y_head,
            value: &cell.value,
        };
        let (key, item) = rule(&text, fields);
        groups.entry(key).or_default().push(item);
    }

    groups
        .into_iter()
        .map(|(key, items)| format!("{}{}{}", key, separator, items.join(", ")))
        .collect()
}

// Example: For daily specials, Monday is none, Tuesday is taco pizza
pub(crate) fn unnamed_row_key_val(cell: &CellText<'_>, f: &FormatFields) -> (String, String) {
    (
        format!("{} {}", f.link, cell.x_head),
        format!("{} {} {}", cell.y_head, f.eq, cell.value),
    )
}

// Example: For sides, wings are $5, mozz sticks are $7
pub(crate) fn unnamed_col_key_val(cell: &CellText<'_>, f: &FormatFields) -> (String, String) {
    (
        format!("{} {}", f.link, cell.y_head),
        format!("{} {} {}", cell.x_head, f.eq, cell.value),
    )
}

// Example: When country = South Korea, Dominos is #1, Pizza Alvolo is #2
pub(crate) fn named_row_key_val(cell: &CellText<'_>, f: &FormatFields) -> (String, String) {
    (
        format!("{} {} {} {}", f.link, f.x_label, f.eq, cell.x_head),
        format!("{} {} {}", cell.y_head, f.eq, cell.value),
    )
}

// Example: In the case that chain is Sbarro, locations is 600, hq is Columbus
pub(crate) fn named_col_key_val(cell: &CellText<'_>, f: &FormatFields) -> (String, String) {
    (
        format!("{} {} {} {}", f.link, f.y_label, f.eq, cell.y_head),
        format!("{} {} {}", cell.x_head, f.eq, cell.value),
    )
}

// Example: All possible toppings are sausage, mushroom, olives
pub(crate) fn row_val(cell: &CellText<'_>, f: &FormatFields) -> (String, String) {
    (
        format!("{} {} {}", f.pre, cell.x_head, f.link),
        cell.value.to_string(),
    )
}

// Example: Size can be one of small, medium, large
pub(crate) fn col_val(cell: &CellText<'_>, f: &FormatFields) -> (String, String) {
    (
        format!("{} {} {}", f.pre, cell.y_head, f.link),
        cell.value.to_string(),
    )
}

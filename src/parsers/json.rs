//! JSON readers
//!
//! Object records become a grid whose first row is the sorted union of all
//! keys. A key missing from a record, or a `null`, is rendered as `NaN`.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::core::grid::Grid;
use crate::utils::error::{ConversionError, ConversionResult};

/// Placeholder for absent values in object records
pub const MISSING: &str = "NaN";

/// Read one JSON object per line (any whitespace between objects is accepted)
pub fn parse_json_lines(input: &str) -> ConversionResult<Grid> {
    let records = serde_json::Deserializer::from_str(input)
        .into_iter::<Map<String, Value>>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ConversionError::parse("JSONLines", e))?;
    Grid::new(records_to_rows(&records))
}

/// Read a JSON array of objects
pub fn parse_json_arr_obj(input: &str) -> ConversionResult<Grid> {
    let records: Vec<Map<String, Value>> =
        serde_json::from_str(input).map_err(|e| ConversionError::parse("JSONArrObj", e))?;
    Grid::new(records_to_rows(&records))
}

/// Read a JSON array of arrays; the first inner array is the header row
pub fn parse_json_arr_arr(input: &str) -> ConversionResult<Grid> {
    let records: Vec<Vec<Value>> =
        serde_json::from_str(input).map_err(|e| ConversionError::parse("JSONArrArr", e))?;
    let rows = records
        .iter()
        .map(|record| record.iter().map(value_to_string).collect())
        .collect();
    Grid::new(rows)
}

fn records_to_rows(records: &[Map<String, Value>]) -> Vec<Vec<String>> {
    if records.is_empty() {
        return Vec::new();
    }

    let keys: BTreeSet<&String> = records.iter().flat_map(|r| r.keys()).collect();
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len() + 1);
    rows.push(keys.iter().map(|k| k.to_string()).collect());
    for record in records {
        rows.push(
            keys.iter()
                .map(|k| record.get(*k).map_or_else(|| MISSING.to_string(), value_to_string))
                .collect(),
        );
    }
    rows
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => MISSING.to_string(),
        other => other.to_string(),
    }
}

//! CSV and TSV readers

use crate::core::grid::Grid;
use crate::utils::error::{ConversionError, ConversionResult};

/// Read comma separated values
pub fn parse_csv(input: &str) -> ConversionResult<Grid> {
    parse_delimited(input, b',', "CSV")
}

/// Read tab separated values
pub fn parse_tsv(input: &str) -> ConversionResult<Grid> {
    parse_delimited(input, b'\t', "TSV")
}

fn parse_delimited(input: &str, delimiter: u8, format: &str) -> ConversionResult<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_reader(input.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ConversionError::parse(format, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Grid::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_keeps_header_row() {
        let grid = parse_csv("_,col1,col2\nrow1,val11,val12\n").unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(0, 0), Some("_"));
        assert_eq!(grid.get(2, 1), Some("val12"));
    }

    #[test]
    fn test_csv_quoted_fields() {
        let grid = parse_csv("name,hq\nSbarro,\"Columbus, Ohio\"\n").unwrap();
        assert_eq!(grid.get(1, 1), Some("Columbus, Ohio"));
    }

    #[test]
    fn test_csv_values_are_not_typed() {
        let grid = parse_csv("n\n007\n1.50\n").unwrap();
        assert_eq!(grid.get(0, 1), Some("007"));
        assert_eq!(grid.get(0, 2), Some("1.50"));
    }

    #[test]
    fn test_tsv() {
        let grid = parse_tsv("a\tb, c\n1\t2\n").unwrap();
        assert_eq!(grid.get(1, 0), Some("b, c"));
        assert_eq!(grid.get(1, 1), Some("2"));
    }

    #[test]
    fn test_ragged_csv_is_an_error() {
        let err = parse_csv("a,b\n1\n").unwrap_err();
        assert!(matches!(err, ConversionError::ParseError { .. }));
    }

    #[test]
    fn test_empty_csv() {
        assert!(parse_csv("").unwrap().is_empty());
    }
}

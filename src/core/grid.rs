//! Rectangular grid of string cells
//!
//! Parsers produce a `Grid`; the partitioner consumes it. Ragged input is
//! rejected here so table construction never has to deal with it.

use crate::utils::error::{ConversionError, ConversionResult};

/// A rectangular 2-D grid of pre-stringified cells, stored row-major
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    /// Validate that every row has the same length as the first one
    pub fn new(rows: Vec<Vec<String>>) -> ConversionResult<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ConversionError::invalid(format!(
                "row {} has {} cells, expected {} (grid must be rectangular)",
                y,
                row.len(),
                width
            )));
        }
        Ok(Self { rows, width })
    }

    /// Build a grid from anything string-like, mostly for fixtures
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> ConversionResult<Self>
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.width == 0
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<&str> {
        self.rows.get(y)?.get(x).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_grid() {
        let grid = Grid::from_rows([["_", "col1"], ["row1", "val11"]]).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 1), Some("val11"));
        assert_eq!(grid.get(2, 1), None);
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ];
        let err = Grid::new(rows).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { .. }));
        assert!(err.to_string().contains("row 1 has 1 cells, expected 2"));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(Vec::new()).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
    }
}

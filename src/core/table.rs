//! Header partitioning
//!
//! Turns a flat [`Grid`] into a [`Table`] of [`Cell`]s, each carrying the
//! row and column header sequences it was seen with.
//!
//! Headers accumulate while the grid is walked in row-major order: a cell
//! inside the header band is appended to its row/column accumulator before
//! it takes its snapshot, so `[_, col1, col2]` with a row-header depth of 3
//! gives the three cells the headers `[_]`, `[_, col1]` and
//! `[_, col1, col2]`. Every cell owns its copy; later appends never reach
//! back into cells already built.

use super::grid::Grid;

/// A single grid value with its accumulated header context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
    /// Leading cells of this cell's row, up to the row-header depth
    pub row_header: Vec<String>,
    /// Leading cells of this cell's column, up to the column-header depth
    pub col_header: Vec<String>,
    /// The cell's own content
    pub value: String,
}

impl Cell {
    /// Join the row and column headers with `delim`, independently
    ///
    /// Returns `(row_head_text, col_head_text)`; an empty header joins to `""`.
    pub fn join_headers(&self, delim: &str) -> (String, String) {
        (self.row_header.join(delim), self.col_header.join(delim))
    }
}

/// All cells of a table plus the final header sequence of each row and column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    cells: Vec<Cell>,
    rows: Vec<Vec<String>>,
    columns: Vec<Vec<String>>,
    width: usize,
    height: usize,
}

impl Table {
    /// Partition `grid`, treating the first `row_header_depth` columns as row
    /// headers and the first `col_header_depth` rows as column headers
    pub fn new(grid: &Grid, row_header_depth: usize, col_header_depth: usize) -> Self {
        let width = grid.width();
        let height = grid.height();

        let mut rows: Vec<Vec<String>> = vec![Vec::new(); height];
        let mut columns: Vec<Vec<String>> = vec![Vec::new(); width];
        let mut cells = Vec::with_capacity(width * height);

        for (y, row) in grid.rows().iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                if x < row_header_depth {
                    rows[y].push(value.clone());
                }
                if y < col_header_depth {
                    columns[x].push(value.clone());
                }
                cells.push(Cell {
                    x,
                    y,
                    row_header: rows[y].clone(),
                    col_header: columns[x].clone(),
                    value: value.clone(),
                });
            }
        }

        tracing::debug!(
            width,
            height,
            row_header_depth,
            col_header_depth,
            "partitioned grid"
        );

        Self {
            cells,
            rows,
            columns,
            width,
            height,
        }
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Final row-header sequence of every row
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Final column-header sequence of every column
    pub fn columns(&self) -> &[Vec<String>] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }
}

/// Build a [`Table`] from a grid and the two header depths
pub fn build_table(grid: &Grid, row_header_depth: usize, col_header_depth: usize) -> Table {
    Table::new(grid, row_header_depth, col_header_depth)
}

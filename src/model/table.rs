//! Table and cell types.

use serde::{Deserialize, Serialize};

use super::{Color, Rect};

/// Index of a cell in a table's cell arena.
///
/// A spanning cell covers several grid positions; the dense grid stores the
/// same `CellId` at every position the cell covers, so cell identity is an
/// arena index rather than a shared pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// The arena index of this cell.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A single logical table cell.
///
/// Plain data record: content cells come from input shapes, filler cells are
/// synthesized for grid positions no shape claimed (`content: None`,
/// `visible: false`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell<C> {
    /// Origin row in the grid
    pub row: usize,
    /// Origin column in the grid
    pub col: usize,
    /// Number of grid rows this cell spans (≥ 1)
    pub row_span: usize,
    /// Number of grid columns this cell spans (≥ 1)
    pub col_span: usize,
    /// Bounds relative to the table origin
    pub bounds: Rect,
    /// Caller-supplied content reference (`None` for filler cells)
    pub content: Option<C>,
    /// Whether the cell is rendered by exporters (`false` for filler cells)
    pub visible: bool,
    /// Fill color, if any
    pub fill: Option<Color>,
}

impl<C> Cell<C> {
    /// Check whether this is a synthesized filler cell.
    pub fn is_filler(&self) -> bool {
        self.content.is_none()
    }

    /// Check whether this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }
}

/// An immutable reconstructed table grid.
///
/// Built once from an input shape list and never mutated afterwards.
/// Every grid position references exactly one cell; a spanning cell is
/// referenced identically from every position it covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table<C> {
    row_heights: Vec<f64>,
    col_widths: Vec<f64>,
    cells: Vec<Cell<C>>,
    /// Row-major dense grid of arena indices, length `rows * cols`.
    grid: Vec<CellId>,
}

impl<C> Table<C> {
    pub(crate) fn new(
        row_heights: Vec<f64>,
        col_widths: Vec<f64>,
        cells: Vec<Cell<C>>,
        grid: Vec<CellId>,
    ) -> Self {
        debug_assert_eq!(grid.len(), row_heights.len() * col_widths.len());
        Self {
            row_heights,
            col_widths,
            cells,
            grid,
        }
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    /// Number of columns in the grid.
    pub fn col_count(&self) -> usize {
        self.col_widths.len()
    }

    /// Height of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= row_count()`.
    pub fn row_height(&self, row: usize) -> f64 {
        self.row_heights[row]
    }

    /// Width of column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= col_count()`.
    pub fn col_width(&self, col: usize) -> f64 {
        self.col_widths[col]
    }

    /// All row heights, top to bottom.
    pub fn row_heights(&self) -> &[f64] {
        &self.row_heights
    }

    /// All column widths, left to right.
    pub fn col_widths(&self) -> &[f64] {
        &self.col_widths
    }

    /// Total table width (sum of column widths).
    pub fn total_width(&self) -> f64 {
        self.col_widths.iter().sum()
    }

    /// Total table height (sum of row heights).
    pub fn total_height(&self) -> f64 {
        self.row_heights.iter().sum()
    }

    /// The cell covering grid position `(row, col)`.
    ///
    /// Spanning cells are returned from every position they cover; use
    /// [`is_origin`](Self::is_origin) to visit each logical cell once.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> &Cell<C> {
        &self.cells[self.cell_id(row, col).0]
    }

    /// The arena index of the cell covering `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn cell_id(&self, row: usize, col: usize) -> CellId {
        assert!(
            row < self.row_count() && col < self.col_count(),
            "grid position ({row}, {col}) out of range"
        );
        self.grid[row * self.col_count() + col]
    }

    /// The cell covering `(row, col)`, or `None` if outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell<C>> {
        if row < self.row_count() && col < self.col_count() {
            Some(self.cell(row, col))
        } else {
            None
        }
    }

    /// Check whether `(row, col)` is the origin position of its cell.
    pub fn is_origin(&self, row: usize, col: usize) -> bool {
        let cell = self.cell(row, col);
        cell.row == row && cell.col == col
    }

    /// All cells in the arena, content cells first in input order, then
    /// filler cells in scan order.
    pub fn cells(&self) -> &[Cell<C>] {
        &self.cells
    }

    /// Iterate over content cells (cells backed by an input shape).
    pub fn content_cells(&self) -> impl Iterator<Item = &Cell<C>> {
        self.cells.iter().filter(|c| !c.is_filler())
    }

    /// Iterate over synthesized filler cells.
    pub fn filler_cells(&self) -> impl Iterator<Item = &Cell<C>> {
        self.cells.iter().filter(|c| c.is_filler())
    }

    /// Check whether any cell spans multiple rows or columns.
    pub fn has_merged_cells(&self) -> bool {
        self.cells.iter().any(|c| c.is_merged())
    }
}

//! Grid mapping: assigns each surviving shape an origin and a span.
//!
//! Shapes are processed in original input order; order defines overlap
//! precedence. Cells live in a flat arena and the dense grid stores arena
//! indices, so a spanning cell is the same `CellId` at every position it
//! covers.

use crate::error::{Axis, Error, Result};
use crate::model::{Cell, CellId, Rect, Table};

use super::boundaries::{locate, Boundaries};
use super::diagnostics::Diagnostics;
use super::options::BuildOptions;
use super::InputShape;

/// The mutable grid under construction. Positions still `None` after
/// mapping are handed to the gap filler.
pub(crate) struct GridMap<C> {
    pub cells: Vec<Cell<C>>,
    pub grid: Vec<Option<CellId>>,
    pub rows: usize,
    pub cols: usize,
}

impl<C> GridMap<C> {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Vec::new(),
            grid: vec![None; rows * cols],
            rows,
            cols,
        }
    }

    pub(crate) fn slot(&self, row: usize, col: usize) -> Option<CellId> {
        self.grid[row * self.cols + col]
    }

    pub(crate) fn claim(&mut self, row: usize, col: usize, id: CellId) {
        self.grid[row * self.cols + col] = Some(id);
    }

    /// Finalize into an immutable table. Must only be called once every
    /// grid position has been claimed.
    pub(crate) fn into_table(self, boundaries: &Boundaries) -> Table<C> {
        let row_heights = deltas(&boundaries.rows);
        let col_widths = deltas(&boundaries.cols);
        let grid = self
            .grid
            .into_iter()
            .map(|slot| slot.expect("gap filling leaves no unclaimed grid position"))
            .collect();
        Table::new(row_heights, col_widths, self.cells, grid)
    }
}

fn deltas(boundaries: &[f64]) -> Vec<f64> {
    boundaries.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Map every surviving shape onto the grid.
///
/// Origin lookup must succeed: each shape's own edges contributed the
/// boundaries being searched, so a miss is an internal inconsistency and
/// fails the build.
pub(crate) fn map_shapes<C>(
    shapes: Vec<(usize, InputShape<C>)>,
    boundaries: &Boundaries,
    options: &BuildOptions,
    diagnostics: &mut Diagnostics,
) -> Result<GridMap<C>> {
    let tolerance = options.tolerance;
    let mut map = GridMap::new(boundaries.row_count(), boundaries.col_count());

    for (shape_index, shape) in shapes {
        let bounds = shape.bounds;

        let col = locate(&boundaries.cols, bounds.min_x(), tolerance).ok_or(
            Error::BoundaryNotFound {
                axis: Axis::Column,
                coordinate: bounds.min_x(),
            },
        )?;
        let row = locate(&boundaries.rows, bounds.min_y(), tolerance).ok_or(
            Error::BoundaryNotFound {
                axis: Axis::Row,
                coordinate: bounds.min_y(),
            },
        )?;

        let col_span = expand_span(&boundaries.cols, col, bounds.max_x(), tolerance, Axis::Column)?;
        let row_span = expand_span(&boundaries.rows, row, bounds.max_y(), tolerance, Axis::Row)?;

        let cell = Cell {
            row,
            col,
            row_span,
            col_span,
            bounds: relative_bounds(boundaries, row, col, row_span, col_span),
            content: Some(shape.content),
            visible: true,
            fill: shape.fill.or(options.background),
        };

        let id = CellId(map.cells.len());
        map.cells.push(cell);

        let mut claimed = 0usize;
        for dr in 0..row_span {
            for dc in 0..col_span {
                match map.slot(row + dr, col + dc) {
                    // First claim wins; the existing occupant stays.
                    Some(_) => diagnostics.record_overlap(shape_index, row + dr, col + dc),
                    None => {
                        map.claim(row + dr, col + dc, id);
                        claimed += 1;
                    }
                }
            }
        }

        // A fully occluded shape contributes no cell at all.
        if claimed == 0 {
            map.cells.pop();
        }
    }

    log::debug!(
        "mapped {} cell(s) onto a {}x{} grid",
        map.cells.len(),
        map.rows,
        map.cols
    );

    Ok(map)
}

/// Walk boundaries from `origin + 1` until one matches `max_edge` within
/// tolerance. Running off the end means the shape's own max edge never made
/// it into the boundary array, which is the same invariant violation as a
/// failed origin lookup.
fn expand_span(
    boundaries: &[f64],
    origin: usize,
    max_edge: f64,
    tolerance: f64,
    axis: Axis,
) -> Result<usize> {
    let mut span = 1;
    loop {
        match boundaries.get(origin + span) {
            Some(&b) if (b - max_edge).abs() <= tolerance => return Ok(span),
            Some(_) => span += 1,
            None => {
                return Err(Error::BoundaryNotFound {
                    axis,
                    coordinate: max_edge,
                })
            }
        }
    }
}

/// Cell bounds relative to the table origin, from boundary deltas.
pub(crate) fn relative_bounds(
    boundaries: &Boundaries,
    row: usize,
    col: usize,
    row_span: usize,
    col_span: usize,
) -> Rect {
    Rect::new(
        boundaries.cols[col] - boundaries.cols[0],
        boundaries.rows[row] - boundaries.rows[0],
        boundaries.cols[col + col_span] - boundaries.cols[col],
        boundaries.rows[row + row_span] - boundaries.rows[row],
    )
}

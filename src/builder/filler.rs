//! Gap filling: synthesizes invisible cells for unclaimed grid positions.
//!
//! The scan is row-major. At the first unclaimed position it takes the
//! maximal horizontal run of unclaimed positions, then extends that run
//! downward while every position in the identical horizontal range is still
//! unclaimed. This greedy partition is not minimal; downstream exporters
//! depend on the exact cell boundaries it produces, so it is kept as-is.

use crate::model::{Cell, CellId};

use super::boundaries::Boundaries;
use super::mapper::{relative_bounds, GridMap};

/// Claim every remaining empty grid position with filler cells.
pub(crate) fn fill_gaps<C>(map: &mut GridMap<C>, boundaries: &Boundaries) {
    let mut filler_count = 0usize;

    for row in 0..map.rows {
        let mut col = 0;
        while col < map.cols {
            if map.slot(row, col).is_some() {
                col += 1;
                continue;
            }

            let col_span = horizontal_run(map, row, col);
            let row_span = vertical_extent(map, row, col, col_span);

            let cell = Cell {
                row,
                col,
                row_span,
                col_span,
                bounds: relative_bounds(boundaries, row, col, row_span, col_span),
                content: None,
                visible: false,
                fill: None,
            };
            let id = CellId(map.cells.len());
            map.cells.push(cell);

            for dr in 0..row_span {
                for dc in 0..col_span {
                    map.claim(row + dr, col + dc, id);
                }
            }

            filler_count += 1;
            col += col_span;
        }
    }

    if filler_count > 0 {
        log::debug!("synthesized {filler_count} filler cell(s)");
    }
}

/// Length of the contiguous run of unclaimed positions in `row` starting at
/// `col`.
fn horizontal_run<C>(map: &GridMap<C>, row: usize, col: usize) -> usize {
    let mut span = 0;
    while col + span < map.cols && map.slot(row, col + span).is_none() {
        span += 1;
    }
    span
}

/// Number of rows from `row` downward whose `[col, col + col_span)` range is
/// entirely unclaimed.
fn vertical_extent<C>(map: &GridMap<C>, row: usize, col: usize, col_span: usize) -> usize {
    let mut span = 1;
    while row + span < map.rows {
        let all_empty = (0..col_span).all(|dc| map.slot(row + span, col + dc).is_none());
        if !all_empty {
            break;
        }
        span += 1;
    }
    span
}

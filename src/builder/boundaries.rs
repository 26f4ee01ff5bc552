//! Shape filtering and grid boundary extraction.
//!
//! Boundaries are the sorted, de-duplicated edge coordinates the surviving
//! shapes produce on each axis. Every later pipeline stage matches shape
//! edges back against these arrays, always with the same tolerance that
//! merged them.

use crate::model::Rect;

use super::InputShape;

/// Sorted row and column boundary coordinates for a grid.
///
/// `rows` has `row_count + 1` entries, `cols` has `col_count + 1`; both are
/// strictly increasing with adjacent entries more than the tolerance apart.
#[derive(Debug, Clone)]
pub(crate) struct Boundaries {
    /// Row boundary Y coordinates, top to bottom
    pub rows: Vec<f64>,
    /// Column boundary X coordinates, left to right
    pub cols: Vec<f64>,
}

impl Boundaries {
    /// Number of grid rows.
    pub fn row_count(&self) -> usize {
        self.rows.len() - 1
    }

    /// Number of grid columns.
    pub fn col_count(&self) -> usize {
        self.cols.len() - 1
    }
}

/// Drop degenerate shapes, keeping each survivor's original input index.
///
/// Hairline shapes are expected free-form editing noise; they contribute no
/// boundary and no cell, and their removal is not a diagnostic.
pub(crate) fn filter_shapes<C>(
    shapes: Vec<InputShape<C>>,
    tolerance: f64,
) -> Vec<(usize, InputShape<C>)> {
    let total = shapes.len();
    let surviving: Vec<(usize, InputShape<C>)> = shapes
        .into_iter()
        .enumerate()
        .filter(|(_, shape)| !shape.bounds.is_degenerate(tolerance))
        .collect();

    if surviving.len() < total {
        log::debug!(
            "filtered {} degenerate shape(s) of {}",
            total - surviving.len(),
            total
        );
    }

    surviving
}

/// Extract row and column boundaries from the surviving shapes' edges.
///
/// Returns `None` when either axis ends up with fewer than 2 boundaries:
/// no shape produced a measurable interval there, so there is no table.
pub(crate) fn extract<C>(
    shapes: &[(usize, InputShape<C>)],
    min_bounds: Option<Rect>,
    tolerance: f64,
) -> Option<Boundaries> {
    let mut row_candidates = Vec::with_capacity(shapes.len() * 2 + 2);
    let mut col_candidates = Vec::with_capacity(shapes.len() * 2 + 2);

    for (_, shape) in shapes {
        row_candidates.push(shape.bounds.min_y());
        row_candidates.push(shape.bounds.max_y());
        col_candidates.push(shape.bounds.min_x());
        col_candidates.push(shape.bounds.max_x());
    }

    if let Some(rect) = min_bounds {
        row_candidates.push(rect.min_y());
        row_candidates.push(rect.max_y());
        col_candidates.push(rect.min_x());
        col_candidates.push(rect.max_x());
    }

    let rows = coalesce(row_candidates, tolerance);
    let cols = coalesce(col_candidates, tolerance);

    log::debug!(
        "extracted {} row and {} column boundaries from {} shape(s)",
        rows.len(),
        cols.len(),
        shapes.len()
    );

    if rows.len() < 2 || cols.len() < 2 {
        return None;
    }

    Some(Boundaries { rows, cols })
}

/// Sort candidates and keep the first element of every run of values within
/// `tolerance` of the last kept value. The earlier (smaller) value of a
/// near-equal cluster always wins, which keeps merging deterministic.
fn coalesce(mut candidates: Vec<f64>, tolerance: f64) -> Vec<f64> {
    candidates.sort_by(f64::total_cmp);

    let mut kept: Vec<f64> = Vec::with_capacity(candidates.len());
    for value in candidates {
        match kept.last() {
            Some(&last) if value - last <= tolerance => {}
            _ => kept.push(value),
        }
    }
    kept
}

/// Tolerance-aware binary search over a sorted boundary array.
///
/// Boundaries are strictly increasing with gaps larger than the tolerance,
/// but two adjacent boundaries can both match `target` when their gap is at
/// most twice the tolerance. The earlier boundary wins that tie, matching
/// how [`coalesce`] merges a near-equal edge into the earlier kept value;
/// preferring the later one would shift origins onto the wrong grid line.
pub(crate) fn locate(boundaries: &[f64], target: f64, tolerance: f64) -> Option<usize> {
    let idx = boundaries.partition_point(|&b| b < target);

    if idx > 0 && (target - boundaries[idx - 1]).abs() <= tolerance {
        return Some(idx - 1);
    }
    if idx < boundaries.len() && (boundaries[idx] - target).abs() <= tolerance {
        return Some(idx);
    }
    None
}

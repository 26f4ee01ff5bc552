//! # gridform
//!
//! Grid-topology inference for free-form report layouts.
//!
//! Given an unordered collection of axis-aligned rectangular cell shapes
//! placed at arbitrary absolute positions in a shared 2-D coordinate space,
//! this library reconstructs the canonical row/column grid — with correct
//! merged-cell spans and synthesized filler cells for uncovered regions —
//! that grid-native output formats (spreadsheet, rich-text table, HTML
//! table) require.
//!
//! ## Quick Start
//!
//! ```
//! use gridform::{build_table, InputShape, Rect};
//!
//! fn main() -> gridform::Result<()> {
//!     let shapes = vec![
//!         InputShape::new(Rect::new(0.0, 0.0, 200.0, 20.0), "header"),
//!         InputShape::new(Rect::new(0.0, 20.0, 100.0, 20.0), "left"),
//!         InputShape::new(Rect::new(100.0, 20.0, 100.0, 20.0), "right"),
//!     ];
//!
//!     let outcome = build_table(shapes)?;
//!     let table = outcome.into_table().expect("enough structure for a table");
//!
//!     assert_eq!(table.row_count(), 2);
//!     assert_eq!(table.col_count(), 2);
//!     assert_eq!(table.cell(0, 0).col_span, 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Tolerance-based clustering**: near-equal shape edges merge into one
//!   grid line, governed by a single shared tolerance
//! - **Merged-cell spans**: shapes covering several grid intervals become
//!   spanning cells, referenced from every position they cover
//! - **Gap filling**: unclaimed grid positions are covered by invisible
//!   filler cells so the result is always a dense grid
//! - **Overlap resolution**: first-claimed wins, with per-build diagnostics
//!   instead of global state
//! - **Parallel batch builds**: independent shape groups via Rayon

pub mod builder;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use builder::{
    BuildOptions, BuildOutcome, Diagnostic, Diagnostics, InputShape, DEFAULT_TOLERANCE,
};
pub use error::{Axis, Error, Result};
pub use model::{Cell, CellId, Color, Rect, Table};

use rayon::prelude::*;

/// Build a table from a list of input shapes with default options.
///
/// Returns a [`BuildOutcome`] whose `table` is `None` when the shapes carry
/// too little structure (fewer than two boundaries on some axis).
///
/// # Example
///
/// ```
/// use gridform::{build_table, InputShape, Rect};
///
/// let shapes = vec![InputShape::new(Rect::new(0.0, 0.0, 100.0, 40.0), 1u32)];
/// let outcome = build_table(shapes).unwrap();
/// assert!(outcome.table().is_some());
/// ```
pub fn build_table<C>(shapes: Vec<InputShape<C>>) -> Result<BuildOutcome<C>> {
    builder::build(shapes, &BuildOptions::default())
}

/// Build a table with custom options.
///
/// # Example
///
/// ```
/// use gridform::{build_table_with_options, BuildOptions, InputShape, Rect};
///
/// let options = BuildOptions::new()
///     .with_tolerance(0.25)
///     .with_min_bounds(Rect::new(0.0, 0.0, 500.0, 700.0));
/// let shapes = vec![InputShape::new(Rect::new(0.0, 0.0, 100.0, 40.0), 1u32)];
/// let outcome = build_table_with_options(shapes, &options).unwrap();
/// ```
pub fn build_table_with_options<C>(
    shapes: Vec<InputShape<C>>,
    options: &BuildOptions,
) -> Result<BuildOutcome<C>> {
    builder::build(shapes, options)
}

/// Build tables for several independent shape groups.
///
/// Groups are processed in parallel unless `options.parallel` is false.
/// Each build is fully independent; diagnostics are scoped per outcome.
pub fn build_tables<C: Send>(
    groups: Vec<Vec<InputShape<C>>>,
    options: &BuildOptions,
) -> Result<Vec<BuildOutcome<C>>> {
    if options.parallel {
        groups
            .into_par_iter()
            .map(|shapes| builder::build(shapes, options))
            .collect()
    } else {
        groups
            .into_iter()
            .map(|shapes| builder::build(shapes, options))
            .collect()
    }
}

/// Builder for configuring and running table reconstruction.
///
/// # Example
///
/// ```
/// use gridform::{Color, InputShape, Rect, TableBuilder};
///
/// let shapes = vec![InputShape::new(Rect::new(0.0, 0.0, 100.0, 40.0), "only")];
/// let outcome = TableBuilder::new()
///     .with_tolerance(0.5)
///     .with_background(Color::new(255, 255, 255))
///     .build(shapes)?;
/// # Ok::<(), gridform::Error>(())
/// ```
pub struct TableBuilder {
    options: BuildOptions,
}

impl TableBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: BuildOptions::default(),
        }
    }

    /// Set the coordinate tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.options = self.options.with_tolerance(tolerance);
        self
    }

    /// Set the minimum table rectangle.
    pub fn with_min_bounds(mut self, min_bounds: Rect) -> Self {
        self.options = self.options.with_min_bounds(min_bounds);
        self
    }

    /// Set the inherited background fill.
    pub fn with_background(mut self, background: Color) -> Self {
        self.options = self.options.with_background(background);
        self
    }

    /// Disable parallel processing for batch builds.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Build a table from the given shapes.
    pub fn build<C>(&self, shapes: Vec<InputShape<C>>) -> Result<BuildOutcome<C>> {
        builder::build(shapes, &self.options)
    }

    /// Build tables for several independent shape groups.
    pub fn build_all<C: Send>(&self, groups: Vec<Vec<InputShape<C>>>) -> Result<Vec<BuildOutcome<C>>> {
        build_tables(groups, &self.options)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

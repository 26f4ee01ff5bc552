//! Table building pipeline.
//!
//! A single forward pass: filter degenerate shapes, extract boundaries, map
//! shapes onto the grid, fill gaps, assemble the immutable [`Table`]. No
//! stage is revisited.

mod boundaries;
mod diagnostics;
mod filler;
mod mapper;
mod options;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use options::{BuildOptions, DEFAULT_TOLERANCE};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Color, Rect, Table};

/// An input cell shape placed at an absolute position in the shared layout
/// coordinate space.
///
/// `C` is an opaque content reference; the builder carries it into the
/// resulting cell without inspecting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputShape<C> {
    /// Bounds in the shared coordinate space
    pub bounds: Rect,
    /// Opaque content reference
    pub content: C,
    /// Fill color, if any
    pub fill: Option<Color>,
}

impl<C> InputShape<C> {
    /// Create a new shape with no fill.
    pub fn new(bounds: Rect, content: C) -> Self {
        Self {
            bounds,
            content,
            fill: None,
        }
    }

    /// Set the fill color and return self.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// The result of one table build.
///
/// `table` is `None` when the shapes produced fewer than two boundaries on
/// some axis: there is no measurable row or column interval, so no table
/// exists. That is an expected outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildOutcome<C> {
    /// The reconstructed table, if the input had enough structure
    pub table: Option<Table<C>>,
    /// Data-quality findings recorded during this build
    pub diagnostics: Diagnostics,
}

impl<C> BuildOutcome<C> {
    /// The table, if one was built.
    pub fn table(&self) -> Option<&Table<C>> {
        self.table.as_ref()
    }

    /// Consume the outcome, keeping only the table.
    pub fn into_table(self) -> Option<Table<C>> {
        self.table
    }

    /// Check whether any overlap was recorded.
    pub fn has_overlaps(&self) -> bool {
        self.diagnostics.has_overlaps()
    }
}

/// Run the full pipeline over one group of shapes.
pub(crate) fn build<C>(
    shapes: Vec<InputShape<C>>,
    options: &BuildOptions,
) -> Result<BuildOutcome<C>> {
    options.validate()?;
    let tolerance = options.tolerance;
    let mut diagnostics = Diagnostics::new();

    let surviving = boundaries::filter_shapes(shapes, tolerance);

    let Some(bounds) = boundaries::extract(&surviving, options.min_bounds, tolerance) else {
        log::debug!("insufficient structure for a table; returning no table");
        return Ok(BuildOutcome {
            table: None,
            diagnostics,
        });
    };

    let mut map = mapper::map_shapes(surviving, &bounds, options, &mut diagnostics)?;
    filler::fill_gaps(&mut map, &bounds);

    Ok(BuildOutcome {
        table: Some(map.into_table(&bounds)),
        diagnostics,
    })
}

//! Per-build diagnostics collection.
//!
//! Data-quality findings are recorded here instead of being raised as
//! errors, and the collector is scoped to a single build so concurrent
//! builds cannot interfere and tests can assert on findings
//! deterministically.

use serde::{Deserialize, Serialize};

/// A single data-quality finding from a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// Two shapes claimed the same grid position. The first claim stands;
    /// the later shape's claim on this position was discarded.
    Overlap {
        /// Input-order index of the shape whose claim was rejected
        shape_index: usize,
        /// Grid row of the contested position
        row: usize,
        /// Grid column of the contested position
        col: usize,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::Overlap {
                shape_index,
                row,
                col,
            } => write!(
                f,
                "shape {shape_index} overlaps an earlier cell at grid position ({row}, {col})"
            ),
        }
    }
}

/// Diagnostics collected during a single table build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
    #[serde(skip)]
    warned_overlap: bool,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an overlap finding. Logs a warning for the first overlap of
    /// the build only; the structured list stays complete.
    pub(crate) fn record_overlap(&mut self, shape_index: usize, row: usize, col: usize) {
        if !self.warned_overlap {
            log::warn!(
                "overlapping cells: shape {shape_index} claims already-occupied \
                 grid position ({row}, {col}); keeping the earlier cell"
            );
            self.warned_overlap = true;
        }
        self.diagnostics.push(Diagnostic::Overlap {
            shape_index,
            row,
            col,
        });
    }

    /// Check whether no findings were recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of recorded findings.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Iterate over recorded findings in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Check whether any overlap was recorded.
    pub fn has_overlaps(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::Overlap { .. }))
    }
}

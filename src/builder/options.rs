//! Build options and configuration.

use crate::error::{Error, Result};
use crate::model::{Color, Rect};

/// Default coordinate tolerance, in layout length units.
///
/// One shared tolerance governs boundary de-duplication, origin matching,
/// and span termination. Using different values for those steps can
/// miscompute spans, so the pipeline never takes more than one.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Options for building a table grid from input shapes.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Maximum coordinate delta at which two edges are treated as equal.
    pub tolerance: f64,

    /// Minimum area the table must cover. When set, its extents contribute
    /// row/column boundaries even if no shape edge reaches them.
    pub min_bounds: Option<Rect>,

    /// Fill inherited by cells whose shape carries no fill of its own.
    pub background: Option<Color>,

    /// Whether [`build_tables`](crate::build_tables) processes shape groups
    /// in parallel.
    pub parallel: bool,
}

impl BuildOptions {
    /// Create new build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coordinate tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the minimum table rectangle.
    pub fn with_min_bounds(mut self, min_bounds: Rect) -> Self {
        self.min_bounds = Some(min_bounds);
        self
    }

    /// Set the inherited background fill.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            min_bounds: None,
            background: None,
            parallel: true,
        }
    }
}

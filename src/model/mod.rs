//! Table model types for reconstructed grids.
//!
//! This module defines the immutable result of grid reconstruction. The
//! model is format-agnostic: spreadsheet, rich-text, and HTML exporters all
//! consume the same [`Table`] through its read-only accessors.

mod geometry;
mod table;

pub use geometry::{Color, Rect};
pub use table::{Cell, CellId, Table};

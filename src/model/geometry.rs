//! Geometry primitives shared by input shapes and table cells.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in the shared layout coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    /// Width of the rectangle
    pub width: f64,
    /// Height of the rectangle
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge X coordinate.
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Right edge X coordinate.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge Y coordinate.
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Bottom edge Y coordinate.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Check whether the rectangle has no measurable extent on either axis
    /// at the given tolerance. Hairline shapes produced by free-form editing
    /// are filtered with this test before boundary extraction.
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        self.width <= tolerance || self.height <= tolerance
    }
}

/// An opaque RGB fill color, carried through to cells untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Create a new color from RGB components.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

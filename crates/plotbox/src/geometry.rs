#![forbid(unsafe_code)]

//! Plain geometry types shared across the layout engine.
//!
//! Coordinates are `f64` in an y-up space: `y` is the *bottom* edge of a
//! rectangle and `top()` is `y + height`. This matches the solver's view of
//! the world; conversion to a host's coordinate space (y-down pixels, figure
//! fractions, ...) is the placement backend's concern.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in solver space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Bottom edge (y-up).
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its bottom-left corner and size.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge (`y + height`).
    #[inline]
    #[must_use]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the rectangle has no area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Snap every component to the nearest integer.
    ///
    /// This is a lossy convenience for integer pixel grids. Callers that need
    /// sub-pixel precision should use the unrounded rectangle instead.
    #[inline]
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
            width: self.width.round(),
            height: self.height.round(),
        }
    }
}

#![forbid(unsafe_code)]

//! Trait seams for the two external collaborators.
//!
//! The engine never renders. Everything it needs from the host plotting
//! surface fits in two narrow traits:
//!
//! - [`TextMeasurer`]: the pixel extent of a piece of text for a font class
//!   and rotation, used to derive minimum sizes for label boxes.
//! - [`Surface`]: placing already-sized content at solved coordinates, and
//!   reporting the tight content bounding box of a plot region so the engine
//!   can apply its one-shot correction pass.
//!
//! Coordinate conversion between solver space (y-up, see
//! [`Rect`](crate::Rect)) and whatever space the host uses is the
//! implementation's concern.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Font size class for measured text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontClass {
    /// Tick/axis label size.
    Label,
    /// Title size.
    Title,
}

/// Text rotation convention: vertical for side labels, horizontal otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Horizontal,
    Vertical,
}

/// A piece of text attached to a box, with its measurement parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPayload {
    pub text: String,
    pub font: FontClass,
    pub rotation: Rotation,
}

impl TextPayload {
    /// Create a payload.
    #[must_use]
    pub fn new(text: impl Into<String>, font: FontClass, rotation: Rotation) -> Self {
        Self {
            text: text.into(),
            font,
            rotation,
        }
    }
}

/// Measures the pixel extent of text.
pub trait TextMeasurer {
    /// Return `(width, height)` in pixels for `text` rendered at the given
    /// font class and rotation.
    fn measure(&self, text: &str, font: FontClass, rotation: Rotation) -> (f64, f64);
}

/// Places solved content on the host surface.
pub trait Surface {
    /// Position a text object at the solved bottom-left point and register it
    /// for display.
    fn place_text(&mut self, payload: &TextPayload, x: f64, y: f64);

    /// Create or reposition the plottable region at `rect` and return the
    /// tight bounding box of its rendered content (which may overhang the
    /// requested rectangle, e.g. tick labels).
    fn place_region(&mut self, rect: Rect) -> Rect;
}

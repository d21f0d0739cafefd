#![forbid(unsafe_code)]

//! The composite frame: a plot region surrounded by labels and a title.
//!
//! A [`Frame`] owns a fixed topology of child boxes:
//!
//! ```text
//! +- outer ----------------------------+
//! |             title                  |
//! |           top label                |
//! |  left   +----------+   right      |
//! |  label  |  center  |   label      |
//! |         +----------+              |
//! |           bottom label             |
//! +------------------------------------+
//! ```
//!
//! Construction wires the whole thing into one constraint batch: vertical and
//! horizontal stacking, centerline alignment, padding insets against the
//! outer box, and non-negativity of the outer origin. The center region's
//! preferred size is seeded large so it claims available space over labels.
//!
//! The frame's own geometry is driven externally, by a
//! [`GridLayout`](crate::GridLayout) placement or an explicit
//! [`set_geometry`](crate::LayoutBox::set_geometry) on [`outer`](Frame::outer).

use std::str::FromStr;

use cassowary::Variable;
use cassowary::WeightedRelation::{GE, LE};
use cassowary::strength::{REQUIRED, WEAK};
use serde::{Deserialize, Serialize};

use crate::align::{Attr, align, hstack, vstack};
use crate::boxes::LayoutBox;
use crate::solver::{LayoutError, LayoutSolver};
use crate::surface::{FontClass, Rotation, Surface, TextMeasurer, TextPayload};

/// Default inset between the outer box and the outermost children.
const DEFAULT_PADDING: f64 = 10.0;

/// Seed preference for the center region, large enough to dominate labels.
const CENTER_PREF: f64 = 1000.0;

/// Where a label attaches on a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSlot {
    Left,
    Right,
    Top,
    Bottom,
    Title,
}

impl FromStr for LabelSlot {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "title" => Ok(Self::Title),
            other => Err(LayoutError::UnknownSlot(other.to_owned())),
        }
    }
}

/// A composite container: center region, four edge labels, and a title.
///
/// Child boxes are named under the frame's name (`{name}.center`,
/// `{name}.title`, ...), so frame names must be unique per solver just like
/// box names.
#[derive(Debug)]
pub struct Frame {
    outer: LayoutBox,
    center: LayoutBox,
    title: LayoutBox,
    top_label: LayoutBox,
    bottom_label: LayoutBox,
    left_label: LayoutBox,
    right_label: LayoutBox,
    /// Soft inset between the outer box and its children.
    pub padding: Variable,
}

impl Frame {
    /// Build the frame and register its full constraint set on `solver`.
    pub fn new(solver: &mut LayoutSolver, name: impl Into<String>) -> Result<Self, LayoutError> {
        let name = name.into();
        let outer = LayoutBox::new(solver, name.clone())?;
        let center = LayoutBox::new_region(solver, format!("{name}.center"))?;
        let title = LayoutBox::new(solver, format!("{name}.title"))?;
        let top_label = LayoutBox::new(solver, format!("{name}.top_label"))?;
        let bottom_label = LayoutBox::new(solver, format!("{name}.bottom_label"))?;
        let left_label = LayoutBox::new(solver, format!("{name}.left_label"))?;
        let right_label = LayoutBox::new(solver, format!("{name}.right_label"))?;

        let padding = Variable::new();
        solver.edit(padding, WEAK)?;
        solver.suggest(padding, DEFAULT_PADDING)?;

        let column = [&title, &top_label, &center, &bottom_label];
        let row = [&left_label, &center, &right_label];

        let mut constraints = vstack(&column, 0.0);
        constraints.extend(hstack(&row, 0.0));
        constraints.extend([
            // Padding insets: the outer edges sit outward of the outermost
            // children by at least `padding`.
            (outer.left + padding) | LE(REQUIRED) | left_label.left,
            (outer.right - padding) | GE(REQUIRED) | right_label.right,
            (outer.top - padding) | GE(REQUIRED) | title.top,
            (outer.bottom + padding) | LE(REQUIRED) | bottom_label.bottom,
            outer.left | GE(REQUIRED) | 0.0,
            outer.bottom | GE(REQUIRED) | 0.0,
        ]);
        constraints.extend(align(&column, Attr::HCenter));
        constraints.extend(align(&row, Attr::VCenter));
        solver.add_constraints(constraints)?;

        center.suggest_pref_size(solver, CENTER_PREF, CENTER_PREF)?;
        solver.refresh();

        Ok(Self {
            outer,
            center,
            title,
            top_label,
            bottom_label,
            left_label,
            right_label,
            padding,
        })
    }

    /// The frame's own box; drive its geometry through this.
    #[inline]
    #[must_use]
    pub fn outer(&self) -> &LayoutBox {
        &self.outer
    }

    /// The central plot region.
    #[inline]
    #[must_use]
    pub fn center(&self) -> &LayoutBox {
        &self.center
    }

    /// The child box for a slot.
    #[must_use]
    pub fn slot(&self, slot: LabelSlot) -> &LayoutBox {
        match slot {
            LabelSlot::Left => &self.left_label,
            LabelSlot::Right => &self.right_label,
            LabelSlot::Top => &self.top_label,
            LabelSlot::Bottom => &self.bottom_label,
            LabelSlot::Title => &self.title,
        }
    }

    /// Attach a measured text label to a slot.
    ///
    /// Side labels rotate vertically; the title uses the title font class.
    /// The slot box's minimum size grows to the measured extent, which can
    /// only shrink the center region, never violate a hard constraint.
    pub fn add_label(
        &mut self,
        solver: &mut LayoutSolver,
        measurer: &dyn TextMeasurer,
        text: impl Into<String>,
        slot: LabelSlot,
    ) -> Result<(), LayoutError> {
        let font = match slot {
            LabelSlot::Title => FontClass::Title,
            _ => FontClass::Label,
        };
        let rotation = match slot {
            LabelSlot::Left | LabelSlot::Right => Rotation::Vertical,
            _ => Rotation::Horizontal,
        };
        let target = match slot {
            LabelSlot::Left => &mut self.left_label,
            LabelSlot::Right => &mut self.right_label,
            LabelSlot::Top => &mut self.top_label,
            LabelSlot::Bottom => &mut self.bottom_label,
            LabelSlot::Title => &mut self.title,
        };
        target.attach_text(solver, measurer, TextPayload::new(text, font, rotation))
    }

    /// Recompute the solver and place every child on the surface.
    pub fn do_layout(
        &self,
        solver: &mut LayoutSolver,
        surface: &mut dyn Surface,
    ) -> Result<(), LayoutError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("frame_layout", name = %self.outer.name()).entered();
        solver.refresh();
        for child in [
            &self.title,
            &self.top_label,
            &self.bottom_label,
            &self.left_label,
            &self.right_label,
            &self.center,
        ] {
            child.place(solver, surface)?;
        }
        Ok(())
    }
}

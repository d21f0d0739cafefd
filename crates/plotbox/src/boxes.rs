#![forbid(unsafe_code)]

//! The atomic rectangular region.
//!
//! A [`LayoutBox`] owns twelve solver variables: four edges, two sizes, two
//! centers, and two size-hint pairs (minimum, preferred). Construction
//! registers the box's own constraints against the solver:
//!
//! | constraint                         | strength   |
//! |------------------------------------|------------|
//! | `width == right - left`            | required   |
//! | `height == top - bottom`           | required   |
//! | `h_center == (left + right) / 2`   | required   |
//! | `v_center == (top + bottom) / 2`   | required   |
//! | `width >= min_width`               | required   |
//! | `height >= min_height`             | required   |
//! | `pref_width == width`              | tie-break  |
//! | `pref_height == height`            | tie-break  |
//!
//! Minimum sizes are pinned edit variables (suggested to 0 until someone
//! raises them); preferred sizes are strong edit variables whose tie-break
//! equalities nudge the solver toward a preferred size when slack exists
//! without ever overriding a hard constraint.
//!
//! Specialized behavior (measured text, pass-through plot regions) is a
//! [`Content`] payload on the box, not a subclass.

use cassowary::WeightedRelation::{EQ, GE};
use cassowary::Variable;
use cassowary::strength::{REQUIRED, STRONG};

use crate::align::Attr;
use crate::geometry::Rect;
use crate::solver::{LayoutError, LayoutSolver, PIN, TIE_BREAK};
use crate::surface::{Surface, TextMeasurer, TextPayload};

/// Optional content payload determining what [`LayoutBox::place`] does.
#[derive(Debug)]
pub enum Content {
    /// A bare geometric region; placement is a no-op.
    None,
    /// Measured text; placement hands the solved bottom-left point to the
    /// surface.
    Text(TextPayload),
    /// A pass-through plot region; placement positions the region, reads the
    /// surface's tight content bounding box, and repositions once with the
    /// per-edge discrepancy applied. The corrected rectangle is mirrored into
    /// the `adjusted` companion box so other constraints can reference it.
    Region {
        adjusted: Box<LayoutBox>,
    },
}

/// A rectangular region expressed as solver variables.
///
/// All geometric state lives in the solver; a `LayoutBox` is only the bundle
/// of variable handles plus its name and payload. Reading geometry goes
/// through [`rect`](Self::rect) / [`rounded_rect`](Self::rounded_rect).
#[derive(Debug)]
pub struct LayoutBox {
    name: String,
    pub left: Variable,
    pub right: Variable,
    pub top: Variable,
    pub bottom: Variable,
    pub width: Variable,
    pub height: Variable,
    pub h_center: Variable,
    pub v_center: Variable,
    pub min_width: Variable,
    pub min_height: Variable,
    pub pref_width: Variable,
    pub pref_height: Variable,
    content: Content,
}

impl LayoutBox {
    /// Create a box and register its constraints on `solver`.
    ///
    /// The name scopes the box within its tree; constructing two boxes with
    /// the same name against one solver is a configuration error.
    pub fn new(solver: &mut LayoutSolver, name: impl Into<String>) -> Result<Self, LayoutError> {
        Self::with_content(solver, name, Content::None)
    }

    /// Create a pass-through region box, along with its adjusted companion
    /// (named `{name}.adjusted`).
    pub fn new_region(
        solver: &mut LayoutSolver,
        name: impl Into<String>,
    ) -> Result<Self, LayoutError> {
        let name = name.into();
        let mut this = Self::with_content(solver, name.clone(), Content::None)?;
        let adjusted = Self::new(solver, format!("{name}.adjusted"))?;
        this.content = Content::Region {
            adjusted: Box::new(adjusted),
        };
        Ok(this)
    }

    fn with_content(
        solver: &mut LayoutSolver,
        name: impl Into<String>,
        content: Content,
    ) -> Result<Self, LayoutError> {
        let name = name.into();
        solver.claim_name(&name)?;
        let this = Self {
            name,
            left: Variable::new(),
            right: Variable::new(),
            top: Variable::new(),
            bottom: Variable::new(),
            width: Variable::new(),
            height: Variable::new(),
            h_center: Variable::new(),
            v_center: Variable::new(),
            min_width: Variable::new(),
            min_height: Variable::new(),
            pref_width: Variable::new(),
            pref_height: Variable::new(),
            content,
        };
        this.register(solver)?;
        Ok(this)
    }

    /// Register the per-box constraint set. Runs exactly once, at
    /// construction.
    fn register(&self, solver: &mut LayoutSolver) -> Result<(), LayoutError> {
        for hint in [self.min_width, self.min_height] {
            solver.edit(hint, PIN)?;
            solver.suggest(hint, 0.0)?;
        }
        solver.add_constraints([
            self.width | EQ(REQUIRED) | (self.right - self.left),
            self.height | EQ(REQUIRED) | (self.top - self.bottom),
            self.h_center | EQ(REQUIRED) | ((self.left + self.right) / 2.0),
            self.v_center | EQ(REQUIRED) | ((self.top + self.bottom) / 2.0),
            self.width | GE(REQUIRED) | self.min_width,
            self.height | GE(REQUIRED) | self.min_height,
        ])?;
        for hint in [self.pref_width, self.pref_height] {
            solver.edit(hint, STRONG)?;
            solver.suggest(hint, 0.0)?;
        }
        solver.add_constraints([
            self.pref_width | EQ(TIE_BREAK) | self.width,
            self.pref_height | EQ(TIE_BREAK) | self.height,
        ])?;
        solver.refresh();
        Ok(())
    }

    /// The box's name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The box's content payload.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The solver variable for one of the eight geometry quantities.
    #[must_use]
    pub fn attr(&self, attr: Attr) -> Variable {
        match attr {
            Attr::Left => self.left,
            Attr::Right => self.right,
            Attr::Top => self.top,
            Attr::Bottom => self.bottom,
            Attr::Width => self.width,
            Attr::Height => self.height,
            Attr::HCenter => self.h_center,
            Attr::VCenter => self.v_center,
        }
    }

    /// Pin the four edges to explicit coordinates at [`PIN`] strength.
    ///
    /// See [`set_geometry_with_strength`](Self::set_geometry_with_strength).
    pub fn set_geometry(
        &self,
        solver: &mut LayoutSolver,
        left: f64,
        bottom: f64,
        right: f64,
        top: f64,
    ) -> Result<(), LayoutError> {
        self.set_geometry_with_strength(solver, left, bottom, right, top, PIN)
    }

    /// Suggest explicit coordinates for the four edges.
    ///
    /// Each edge is promoted to an edit variable on first use (at `strength`;
    /// the promotion is permanent and later calls reuse the original
    /// strength), then all four values are suggested and the solver is
    /// refreshed. Calling twice with the same values is a no-op for the
    /// solved geometry.
    pub fn set_geometry_with_strength(
        &self,
        solver: &mut LayoutSolver,
        left: f64,
        bottom: f64,
        right: f64,
        top: f64,
        strength: f64,
    ) -> Result<(), LayoutError> {
        for edge in [self.top, self.bottom, self.left, self.right] {
            if !solver.has_edit(edge) {
                solver.edit(edge, strength)?;
            }
        }
        solver.suggest(self.top, top)?;
        solver.suggest(self.bottom, bottom)?;
        solver.suggest(self.left, left)?;
        solver.suggest(self.right, right)?;
        solver.refresh();
        Ok(())
    }

    /// Raise the box's minimum size.
    pub fn suggest_min_size(
        &self,
        solver: &mut LayoutSolver,
        width: f64,
        height: f64,
    ) -> Result<(), LayoutError> {
        solver.suggest(self.min_width, width)?;
        solver.suggest(self.min_height, height)
    }

    /// Set the box's preferred size (a soft target, never a hard bound).
    pub fn suggest_pref_size(
        &self,
        solver: &mut LayoutSolver,
        width: f64,
        height: f64,
    ) -> Result<(), LayoutError> {
        solver.suggest(self.pref_width, width)?;
        solver.suggest(self.pref_height, height)
    }

    /// The solved rectangle, unrounded.
    #[must_use]
    pub fn rect(&self, solver: &LayoutSolver) -> Rect {
        Rect::new(
            solver.value(self.left),
            solver.value(self.bottom),
            solver.value(self.width),
            solver.value(self.height),
        )
    }

    /// The solved rectangle snapped to the integer pixel grid. Lossy; use
    /// [`rect`](Self::rect) when sub-pixel precision matters.
    #[must_use]
    pub fn rounded_rect(&self, solver: &LayoutSolver) -> Rect {
        self.rect(solver).rounded()
    }

    /// One-line summary of the solved edges, for diagnostics.
    #[must_use]
    pub fn describe(&self, solver: &LayoutSolver) -> String {
        format!(
            "{}: (left: {:.1}) (bottom: {:.1}) (right: {:.1}) (top: {:.1})",
            self.name,
            solver.value(self.left),
            solver.value(self.bottom),
            solver.value(self.right),
            solver.value(self.top),
        )
    }

    /// Attach measured text: queries the measurer for the pixel extent and
    /// raises the box's minimum size to fit it.
    pub fn attach_text(
        &mut self,
        solver: &mut LayoutSolver,
        measurer: &dyn TextMeasurer,
        payload: TextPayload,
    ) -> Result<(), LayoutError> {
        let (width, height) = measurer.measure(&payload.text, payload.font, payload.rotation);
        self.suggest_min_size(solver, width, height)?;
        self.content = Content::Text(payload);
        Ok(())
    }

    /// Hand the solved geometry to the surface, according to the content
    /// payload.
    pub fn place(
        &self,
        solver: &mut LayoutSolver,
        surface: &mut dyn Surface,
    ) -> Result<(), LayoutError> {
        match &self.content {
            Content::None => Ok(()),
            Content::Text(payload) => {
                surface.place_text(payload, solver.value(self.left), solver.value(self.bottom));
                Ok(())
            }
            Content::Region { adjusted } => {
                let requested = self.rounded_rect(solver);
                let tight = surface.place_region(requested);
                // Per-edge discrepancy between where we asked the region to be
                // and where its rendered content actually landed.
                let dx = requested.x - tight.x;
                let dx2 = requested.right() - tight.right();
                let dy = requested.y - tight.y;
                let dy2 = requested.top() - tight.top();
                let corrected = Rect::new(
                    requested.x + dx,
                    requested.y + dy,
                    requested.width - dx + dx2,
                    requested.height - dy + dy2,
                );
                // One-shot correction, not an iterative solve.
                surface.place_region(corrected);
                adjusted.set_geometry(
                    solver,
                    corrected.x,
                    corrected.y,
                    corrected.right(),
                    corrected.top(),
                )
            }
        }
    }
}

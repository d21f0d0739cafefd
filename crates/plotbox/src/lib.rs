#![forbid(unsafe_code)]

//! Constraint-based rectangular layout for plot composition.
//!
//! plotbox computes consistent geometries (left/right/top/bottom/width/height)
//! for a set of abstract rectangular regions from declarative relationships
//! between their edges: alignment, stacking, padding, containment, and
//! preferred/minimum sizes. The heavy lifting is a linear-arithmetic
//! constraint system (cassowary) with tiered strengths and re-suggestible
//! edit variables; this crate supplies the box abstraction, the constraint
//! generators, and the composition patterns on top of it.
//!
//! Pieces:
//!
//! - [`LayoutSolver`]: an owned facade over the solver — constraint batches,
//!   idempotent edit-variable declaration, suggestion, refresh, read-back.
//! - [`LayoutBox`]: the atomic region; registers its own hard and soft
//!   constraints at construction and carries an optional [`Content`] payload
//!   (measured text or a pass-through plot region).
//! - [`align`], [`stack`], [`hstack`], [`vstack`]: pure constraint
//!   generators over ordered box sequences.
//! - [`GridLayout`]: uniform row/column partitioning; places a box over a
//!   cell span by suggesting its four edges.
//! - [`Frame`]: the composite container — a center region, four edge labels
//!   and a title, wired together with stacking, alignment and padding insets.
//!
//! Rendering stays outside: the engine only asks a [`TextMeasurer`] for text
//! extents and hands solved rectangles to a [`Surface`].
//!
//! # Example
//!
//! ```
//! use plotbox::{Frame, GridArea, GridLayout, LayoutSolver};
//!
//! let mut solver = LayoutSolver::new();
//! let grid = GridLayout::new(2, 2, 800.0, 600.0)?;
//!
//! let upper_left = Frame::new(&mut solver, "upper_left")?;
//! let right = Frame::new(&mut solver, "right")?;
//! grid.place_rect(&mut solver, upper_left.outer(), GridArea::cell(0, 0))?;
//! grid.place_rect(&mut solver, right.outer(), GridArea::span(0, 1, 2, 1))?;
//!
//! // Ad-hoc cross-frame constraints are ordinary cassowary constraints.
//! use plotbox::{strength::WEAK, WeightedRelation::EQ};
//! solver.add_constraint(
//!     upper_left.center().top | EQ(WEAK) | right.center().top,
//! )?;
//! solver.refresh();
//!
//! assert!(upper_left.center().rect(&solver).width > 0.0);
//! # Ok::<(), plotbox::LayoutError>(())
//! ```
//!
//! Single-threaded by design: one [`LayoutSolver`] per layout tree, all calls
//! direct and synchronous. Constraints are never removed; build a fresh
//! solver for a fresh pass.

pub mod align;
pub mod boxes;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod solver;
pub mod surface;

pub use align::{Attr, Edge, align, align_with_strength, hstack, stack, vstack};
pub use boxes::{Content, LayoutBox};
pub use frame::{Frame, LabelSlot};
pub use geometry::Rect;
pub use grid::{GridArea, GridLayout};
pub use solver::{LayoutError, LayoutSolver, PIN};
pub use surface::{FontClass, Rotation, Surface, TextMeasurer, TextPayload};

// Re-exported so callers can build ad-hoc constraints between boxes.
pub use cassowary::{Constraint, Variable, WeightedRelation, strength};

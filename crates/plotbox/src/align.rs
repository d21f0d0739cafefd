#![forbid(unsafe_code)]

//! Constraint generators for alignment and directional stacking.
//!
//! These are pure functions: they return constraint descriptors and never
//! touch the solver. Callers submit the batch through
//! [`LayoutSolver::add_constraints`](crate::LayoutSolver::add_constraints),
//! so a configuration error (an unknown direction string, say) surfaces
//! before any constraint exists.
//!
//! Padding convention: for both [`hstack`] and [`vstack`], padding increases
//! the separation between neighbors. The sign difference in the generated
//! inequalities (`+ padding` vs `- padding`) is the y-up coordinate axis, not
//! an inconsistency.

use std::str::FromStr;

use cassowary::Constraint;
use cassowary::WeightedRelation::{EQ, GE, LE};
use cassowary::strength::{REQUIRED, WEAK};
use serde::{Deserialize, Serialize};

use crate::boxes::LayoutBox;
use crate::solver::LayoutError;

/// One of the eight geometry quantities of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attr {
    Left,
    Right,
    Top,
    Bottom,
    Width,
    Height,
    HCenter,
    VCenter,
}

impl FromStr for Attr {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            "h_center" => Ok(Self::HCenter),
            "v_center" => Ok(Self::VCenter),
            other => Err(LayoutError::UnknownAttr(other.to_owned())),
        }
    }
}

/// A stacking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// The `(first, second)` attribute pair used for consecutive items when
    /// stacking in this direction.
    fn pair(self) -> (Attr, Attr) {
        match self {
            Self::Left => (Attr::Left, Attr::Right),
            Self::Right => (Attr::Right, Attr::Left),
            Self::Top => (Attr::Top, Attr::Bottom),
            Self::Bottom => (Attr::Bottom, Attr::Top),
        }
    }
}

impl FromStr for Edge {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(LayoutError::UnknownEdge(other.to_owned())),
        }
    }
}

/// Weakly equate `attr` of every subsequent item to the first item's.
///
/// Empty and single-item inputs yield no constraints.
#[must_use]
pub fn align(items: &[&LayoutBox], attr: Attr) -> Vec<Constraint> {
    align_with_strength(items, attr, WEAK)
}

/// [`align`] at an explicit strength tier.
#[must_use]
pub fn align_with_strength(items: &[&LayoutBox], attr: Attr, strength: f64) -> Vec<Constraint> {
    let Some((first, rest)) = items.split_first() else {
        return Vec::new();
    };
    rest.iter()
        .map(|item| first.attr(attr) | EQ(strength) | item.attr(attr))
        .collect()
}

/// Non-overlap stacking for consecutive pairs in the given direction:
/// `prev.first <= next.second` under the edge-pair map
/// {left→(left,right), right→(right,left), top→(top,bottom), bottom→(bottom,top)}.
#[must_use]
pub fn stack(items: &[&LayoutBox], edge: Edge) -> Vec<Constraint> {
    let (first, second) = edge.pair();
    items
        .windows(2)
        .map(|pair| pair[0].attr(first) | LE(REQUIRED) | pair[1].attr(second))
        .collect()
}

/// Left-to-right stacking with a minimum gap:
/// `prev.right + padding <= next.left` for each consecutive pair.
#[must_use]
pub fn hstack(items: &[&LayoutBox], padding: f64) -> Vec<Constraint> {
    items
        .windows(2)
        .map(|pair| (pair[0].right + padding) | LE(REQUIRED) | pair[1].left)
        .collect()
}

/// Top-to-bottom stacking with a minimum gap:
/// `prev.bottom - padding >= next.top` for each consecutive pair.
#[must_use]
pub fn vstack(items: &[&LayoutBox], padding: f64) -> Vec<Constraint> {
    items
        .windows(2)
        .map(|pair| (pair[0].bottom - padding) | GE(REQUIRED) | pair[1].top)
        .collect()
}

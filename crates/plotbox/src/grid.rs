#![forbid(unsafe_code)]

//! Uniform grid partitioning for placing boxes on a canvas.
//!
//! A [`GridLayout`] divides a `width x height` canvas into a fixed number of
//! equal rows and columns, row 0 topmost. Placing a box at a cell (optionally
//! spanning several rows or columns) suggests the span's outer boundaries as
//! the box's four edges; the constraint system does the rest.
//!
//! # Example
//!
//! ```
//! use plotbox::{GridArea, GridLayout, LayoutBox, LayoutSolver};
//!
//! let mut solver = LayoutSolver::new();
//! let grid = GridLayout::new(2, 2, 100.0, 100.0)?;
//! let panel = LayoutBox::new(&mut solver, "panel")?;
//! grid.place_rect(&mut solver, &panel, GridArea::cell(0, 0))?;
//!
//! let rect = panel.rounded_rect(&solver);
//! assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 50.0, 50.0, 50.0));
//! # Ok::<(), plotbox::LayoutError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::boxes::LayoutBox;
use crate::solver::{LayoutError, LayoutSolver};

/// A cell span in a grid: starting cell plus row/column extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridArea {
    /// Starting row (0-indexed, row 0 topmost).
    pub row: usize,
    /// Starting column (0-indexed).
    pub col: usize,
    /// Number of rows this area spans.
    pub rowspan: usize,
    /// Number of columns this area spans.
    pub colspan: usize,
}

impl GridArea {
    /// A single-cell area.
    #[inline]
    #[must_use]
    pub fn cell(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            rowspan: 1,
            colspan: 1,
        }
    }

    /// A spanning area.
    #[inline]
    #[must_use]
    pub fn span(row: usize, col: usize, rowspan: usize, colspan: usize) -> Self {
        Self {
            row,
            col,
            rowspan: rowspan.max(1),
            colspan: colspan.max(1),
        }
    }
}

/// Precomputed boundary coordinates for a fixed `(rows, cols)` partition.
///
/// Stateless once constructed: placement only reads the boundary lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
    /// `cols + 1` x coordinates, left to right.
    col_borders: Vec<f64>,
    /// `rows + 1` y coordinates, running from `height` down to 0.
    row_borders: Vec<f64>,
}

impl GridLayout {
    /// Partition a `width x height` canvas into `rows x cols` equal cells.
    pub fn new(rows: usize, cols: usize, width: f64, height: f64) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        let col_borders = (0..=cols).map(|i| width / cols as f64 * i as f64).collect();
        let row_borders = (0..=rows)
            .map(|i| height - height / rows as f64 * i as f64)
            .collect();
        Ok(Self {
            rows,
            cols,
            col_borders,
            row_borders,
        })
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Pin `item`'s edges to the outer boundaries of `area`.
    ///
    /// Out-of-range cells or spans are a configuration error; nothing is
    /// suggested to the solver in that case.
    pub fn place_rect(
        &self,
        solver: &mut LayoutSolver,
        item: &LayoutBox,
        area: GridArea,
    ) -> Result<(), LayoutError> {
        let end_row = area.row + area.rowspan;
        let end_col = area.col + area.colspan;
        if area.rowspan == 0 || area.colspan == 0 || end_row > self.rows || end_col > self.cols {
            return Err(LayoutError::CellOutOfRange {
                row: area.row,
                col: area.col,
                rowspan: area.rowspan,
                colspan: area.colspan,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let left = self.col_borders[area.col];
        let right = self.col_borders[end_col];
        let top = self.row_borders[area.row];
        let bottom = self.row_borders[end_row];
        item.set_geometry(solver, left, bottom, right, top)
    }
}

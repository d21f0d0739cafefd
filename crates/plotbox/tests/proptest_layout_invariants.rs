//! Property-based invariant tests for the plotbox constraint engine.
//!
//! These tests verify structural invariants that must hold for **any**
//! combination of suggested geometry and available space:
//!
//! 1. Box identities: `width == right - left`, `height == top - bottom`,
//!    centers are edge midpoints, sizes respect minimums.
//! 2. Grid placement lands boxes exactly on the span's outer boundaries,
//!    inside the canvas.
//! 3. Alignment equalizes the chosen attribute across a group.
//! 4. `hstack` keeps at least the requested gap between neighbors.
//! 5. `vstack` keeps at least the requested gap between neighbors.
//! 6. `set_geometry` is idempotent.
//! 7. Frames keep their children inside the padded interior under any
//!    outer geometry.

use plotbox::{
    Attr, Frame, GridArea, GridLayout, LayoutBox, LayoutSolver, align, hstack, vstack,
};
use proptest::prelude::*;

const EPS: f64 = 1e-3;

// ── Helpers ─────────────────────────────────────────────────────────────

fn origin_and_size() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (
        0.0f64..=500.0,
        0.0f64..=500.0,
        0.0f64..=500.0,
        0.0f64..=500.0,
    )
}

fn assert_identities(solver: &LayoutSolver, b: &LayoutBox) {
    let left = solver.value(b.left);
    let right = solver.value(b.right);
    let top = solver.value(b.top);
    let bottom = solver.value(b.bottom);
    assert!((solver.value(b.width) - (right - left)).abs() < EPS);
    assert!((solver.value(b.height) - (top - bottom)).abs() < EPS);
    assert!((solver.value(b.h_center) - (left + right) / 2.0).abs() < EPS);
    assert!((solver.value(b.v_center) - (top + bottom) / 2.0).abs() < EPS);
    assert!(solver.value(b.width) >= solver.value(b.min_width) - EPS);
    assert!(solver.value(b.height) >= solver.value(b.min_height) - EPS);
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Box identities hold for any suggested geometry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn identities_hold_after_any_geometry((x, y, w, h) in origin_and_size()) {
        let mut solver = LayoutSolver::new();
        let b = LayoutBox::new(&mut solver, "b").unwrap();
        b.set_geometry(&mut solver, x, y, x + w, y + h).unwrap();
        assert_identities(&solver, &b);
    }

    #[test]
    fn identities_hold_with_minimum_sizes(
        (x, y, w, h) in origin_and_size(),
        (min_w, min_h) in (0.0f64..=600.0, 0.0f64..=600.0),
    ) {
        let mut solver = LayoutSolver::new();
        let b = LayoutBox::new(&mut solver, "b").unwrap();
        b.suggest_min_size(&mut solver, min_w, min_h).unwrap();
        b.set_geometry(&mut solver, x, y, x + w, y + h).unwrap();
        // The minimum may override the suggested extent; identities survive.
        assert_identities(&solver, &b);
        prop_assert!(solver.value(b.width) >= min_w - EPS);
        prop_assert!(solver.value(b.height) >= min_h - EPS);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Grid placement lands on span boundaries, inside the canvas
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grid_placement_is_exact(
        rows in 1usize..=6,
        cols in 1usize..=6,
        raw_row in 0usize..6,
        raw_col in 0usize..6,
        raw_rowspan in 0usize..6,
        raw_colspan in 0usize..6,
        width in 10.0f64..=1000.0,
        height in 10.0f64..=1000.0,
    ) {
        // Fold the raw values into an always-valid span.
        let row = raw_row % rows;
        let col = raw_col % cols;
        let rowspan = 1 + raw_rowspan % (rows - row);
        let colspan = 1 + raw_colspan % (cols - col);
        let mut solver = LayoutSolver::new();
        let grid = GridLayout::new(rows, cols, width, height).unwrap();
        let b = LayoutBox::new(&mut solver, "b").unwrap();
        grid.place_rect(&mut solver, &b, GridArea::span(row, col, rowspan, colspan)).unwrap();

        let cell_w = width / cols as f64;
        let cell_h = height / rows as f64;
        prop_assert!((solver.value(b.left) - cell_w * col as f64).abs() < EPS);
        prop_assert!((solver.value(b.right) - cell_w * (col + colspan) as f64).abs() < EPS);
        prop_assert!((solver.value(b.top) - (height - cell_h * row as f64)).abs() < EPS);
        prop_assert!(
            (solver.value(b.bottom) - (height - cell_h * (row + rowspan) as f64)).abs() < EPS
        );
        // Inside the canvas.
        prop_assert!(solver.value(b.left) >= -EPS);
        prop_assert!(solver.value(b.right) <= width + EPS);
        prop_assert!(solver.value(b.bottom) >= -EPS);
        prop_assert!(solver.value(b.top) <= height + EPS);
        assert_identities(&solver, &b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Alignment equalizes the chosen attribute
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn align_equalizes_h_centers(
        widths in proptest::collection::vec(1.0f64..=200.0, 2..=5),
    ) {
        let mut solver = LayoutSolver::new();
        let boxes: Vec<LayoutBox> = widths
            .iter()
            .enumerate()
            .map(|(i, _)| LayoutBox::new(&mut solver, format!("b{i}")).unwrap())
            .collect();
        let refs: Vec<&LayoutBox> = boxes.iter().collect();
        solver.add_constraints(align(&refs, Attr::HCenter)).unwrap();
        for (b, w) in boxes.iter().zip(&widths) {
            b.suggest_pref_size(&mut solver, *w, 10.0).unwrap();
        }
        solver.refresh();
        let center = solver.value(boxes[0].h_center);
        for b in &boxes[1..] {
            prop_assert!((solver.value(b.h_center) - center).abs() < EPS);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4 + 5. Stacking keeps at least the requested gap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hstack_gap_is_a_lower_bound(
        (x, y, w, h) in origin_and_size(),
        padding in 0.0f64..=50.0,
    ) {
        let mut solver = LayoutSolver::new();
        let a = LayoutBox::new(&mut solver, "a").unwrap();
        let b = LayoutBox::new(&mut solver, "b").unwrap();
        solver.add_constraints(hstack(&[&a, &b], padding)).unwrap();
        a.set_geometry(&mut solver, x, y, x + w, y + h).unwrap();
        prop_assert!(solver.value(b.left) >= solver.value(a.right) + padding - EPS);
    }

    #[test]
    fn vstack_gap_is_a_lower_bound(
        (x, y, w, h) in origin_and_size(),
        padding in 0.0f64..=50.0,
    ) {
        let mut solver = LayoutSolver::new();
        let a = LayoutBox::new(&mut solver, "a").unwrap();
        let b = LayoutBox::new(&mut solver, "b").unwrap();
        solver.add_constraints(vstack(&[&a, &b], padding)).unwrap();
        a.set_geometry(&mut solver, x, y, x + w, y + h).unwrap();
        prop_assert!(solver.value(b.top) <= solver.value(a.bottom) - padding + EPS);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. set_geometry is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_geometry_twice_changes_nothing((x, y, w, h) in origin_and_size()) {
        let mut solver = LayoutSolver::new();
        let b = LayoutBox::new(&mut solver, "b").unwrap();
        b.set_geometry(&mut solver, x, y, x + w, y + h).unwrap();
        let first = b.rect(&solver);
        b.set_geometry(&mut solver, x, y, x + w, y + h).unwrap();
        let second = b.rect(&solver);
        prop_assert!((first.x - second.x).abs() < EPS);
        prop_assert!((first.y - second.y).abs() < EPS);
        prop_assert!((first.width - second.width).abs() < EPS);
        prop_assert!((first.height - second.height).abs() < EPS);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Frames keep children inside the padded interior
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn frame_children_stay_inside_outer(
        width in 100.0f64..=1000.0,
        height in 100.0f64..=1000.0,
    ) {
        let mut solver = LayoutSolver::new();
        let frame = Frame::new(&mut solver, "fig").unwrap();
        frame.outer().set_geometry(&mut solver, 0.0, 0.0, width, height).unwrap();

        let outer = frame.outer();
        let center = frame.center();
        prop_assert!(solver.value(center.left) >= solver.value(outer.left) - EPS);
        prop_assert!(solver.value(center.right) <= solver.value(outer.right) + EPS);
        prop_assert!(solver.value(center.bottom) >= solver.value(outer.bottom) - EPS);
        prop_assert!(solver.value(center.top) <= solver.value(outer.top) + EPS);
        assert_identities(&solver, center);
        assert_identities(&solver, outer);
    }
}

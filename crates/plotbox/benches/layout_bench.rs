//! Benchmarks for constraint construction and re-suggestion.
//!
//! Two cost centers matter in practice: building a layout tree (variables +
//! constraints) and re-suggesting geometry on an already-built tree (the
//! interactive-resize path).

use criterion::{Criterion, criterion_group, criterion_main};
use plotbox::{Frame, GridArea, GridLayout, LayoutSolver};
use std::hint::black_box;

fn build_frame_grid(c: &mut Criterion) {
    c.bench_function("build_2x2_frame_grid", |b| {
        b.iter(|| {
            let mut solver = LayoutSolver::new();
            let grid = GridLayout::new(2, 2, 800.0, 600.0).unwrap();
            let frames: Vec<Frame> = (0..4)
                .map(|i| Frame::new(&mut solver, format!("frame{i}")).unwrap())
                .collect();
            for (i, frame) in frames.iter().enumerate() {
                grid.place_rect(
                    &mut solver,
                    frame.outer(),
                    GridArea::cell(i / 2, i % 2),
                )
                .unwrap();
            }
            solver.refresh();
            black_box(frames[0].center().rect(&solver))
        });
    });
}

fn resuggest_geometry(c: &mut Criterion) {
    let mut solver = LayoutSolver::new();
    let frame = Frame::new(&mut solver, "frame").unwrap();
    frame
        .outer()
        .set_geometry(&mut solver, 0.0, 0.0, 800.0, 600.0)
        .unwrap();

    let mut size = 400.0;
    c.bench_function("resuggest_outer_geometry", |b| {
        b.iter(|| {
            size = if size >= 800.0 { 400.0 } else { size + 1.0 };
            frame
                .outer()
                .set_geometry(&mut solver, 0.0, 0.0, size, size * 0.75)
                .unwrap();
            black_box(frame.center().rect(&solver))
        });
    });
}

criterion_group!(benches, build_frame_grid, resuggest_geometry);
criterion_main!(benches);

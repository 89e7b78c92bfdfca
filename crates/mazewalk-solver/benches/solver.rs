//! Benchmarks for complete maze walks.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use mazewalk_core::{CellState, Grid, Position};
use mazewalk_solver::MazeSolver;

const SIZE: usize = 64;

/// An empty room; the walk sweeps north-first and backtracks a lot.
fn open_grid() -> Grid {
    Grid::new(
        vec![CellState::Open; SIZE * SIZE],
        SIZE,
        SIZE,
        Position::new(0, SIZE - 1),
        Position::new(SIZE - 1, 0),
    )
    .unwrap()
}

/// A single corridor snaking through every other row.
///
/// With `sealed`, the corridor is blocked just before the finish, forcing a
/// full retreat to the start.
fn serpentine_grid(sealed: bool) -> Grid {
    let mut cells = vec![CellState::Wall; SIZE * SIZE];
    for y in (0..SIZE).step_by(2) {
        for x in 0..SIZE {
            cells[y * SIZE + x] = CellState::Open;
        }
        if y + 1 < SIZE {
            let gap = if (y / 2) % 2 == 0 { SIZE - 1 } else { 0 };
            cells[(y + 1) * SIZE + gap] = CellState::Open;
        }
    }

    let last_row = (SIZE - 1) / 2 * 2;
    let (finish_x, before_x) = if (last_row / 2) % 2 == 0 {
        (SIZE - 1, SIZE - 2)
    } else {
        (0, 1)
    };
    if sealed {
        cells[last_row * SIZE + before_x] = CellState::Wall;
    }
    Grid::new(
        cells,
        SIZE,
        SIZE,
        Position::new(0, 0),
        Position::new(finish_x, last_row),
    )
    .unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let grids = [
        ("open", open_grid()),
        ("serpentine", serpentine_grid(false)),
        ("sealed", serpentine_grid(true)),
    ];

    for (param, grid) in grids {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || MazeSolver::new(hint::black_box(grid.clone())),
                |solver| hint::black_box(solver.solve()),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);

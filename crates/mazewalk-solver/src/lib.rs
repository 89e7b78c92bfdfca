//! Depth-first maze solving with explicit backtracking.
//!
//! [`MazeSolver`] walks a [`Grid`] from its start cell, always taking the
//! first open neighbor in clockwise-from-north order, and retreats along its
//! path stack when it reaches a dead end. It stops as soon as the finish is
//! adjacent ([`Outcome::Solved`]) or when it has backtracked all the way to
//! the start with nothing left to explore ([`Outcome::Failed`]).
//!
//! The walk finds *a* path, not necessarily the shortest one, and is fully
//! deterministic: the same grid always yields the same path and move count.
//!
//! [`Grid`]: mazewalk_core::Grid
//!
//! # Examples
//!
//! ```
//! use mazewalk_core::{Grid, Position};
//! use mazewalk_solver::MazeSolver;
//!
//! let grid: Grid = "\
//! 3 3
//! 0 0
//! 2 2
//! 1 1 1
//! 1 0 1
//! 1 1 1
//! "
//! .parse()?;
//!
//! let mut solver = MazeSolver::new(grid);
//! let outcome = solver.solve();
//!
//! let expected = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)].map(Position::from);
//! assert_eq!(outcome.path(), Some(&expected[..]));
//! assert_eq!(outcome.move_count(), 4);
//! # Ok::<(), mazewalk_core::LoadError>(())
//! ```
//!
//! # Step-by-step solving
//!
//! ```
//! use mazewalk_core::Grid;
//! use mazewalk_solver::MazeSolver;
//!
//! let grid: Grid = "4 1\n0 0\n3 0\n1 1 1 1\n".parse()?;
//! let mut solver = MazeSolver::new(grid);
//!
//! while let Some(report) = solver.step_verbose() {
//!     println!("move {}: {}", report.move_number, report.action);
//!     for row in solver.render() {
//!         println!("{row}");
//!     }
//! }
//! assert!(solver.state().is_solved());
//! # Ok::<(), mazewalk_core::LoadError>(())
//! ```

pub use self::{
    maze_solver::{MazeSolver, Outcome, SolverState},
    step_report::{StepAction, StepReport},
};

mod maze_solver;
mod step_report;

#[cfg(test)]
mod testing;

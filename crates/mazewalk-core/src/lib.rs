//! Core data structures for grid mazes.
//!
//! This crate provides the rectangular maze grid shared by the solver and the
//! command-line front end.
//!
//! # Overview
//!
//! - [`position`]: Column/row coordinates ([`Position`]) and the four compass
//!   [`Direction`]s, including the fixed clockwise-from-north examination order.
//! - [`cell_state`]: The closed set of cell categories ([`CellState`]).
//! - [`grid`]: The fixed-shape, mutable-content [`Grid`] with its start and finish.
//! - [`maze_file`]: The plain-text maze description format and its loader.
//!
//! # Examples
//!
//! ```
//! use mazewalk_core::{CellState, Grid, Position};
//!
//! let grid: Grid = "\
//! 3 2
//! 0 0
//! 2 1
//! 1 1 1
//! 0 0 1
//! "
//! .parse()?;
//!
//! assert_eq!(grid.state_at(Position::new(0, 0))?, CellState::Start);
//! assert_eq!(grid.state_at(Position::new(2, 1))?, CellState::Finish);
//! assert_eq!(grid.render(None), ["4 1 1", "0 0 5"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell_state;
pub mod grid;
pub mod maze_file;
pub mod position;

// Re-export commonly used types
pub use self::{
    cell_state::CellState,
    grid::{Grid, GridError},
    maze_file::LoadError,
    position::{Direction, Position},
};

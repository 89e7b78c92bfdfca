//! Test utilities for solver behavior.
//!
//! This module provides [`MazeTester`], a harness for describing small mazes
//! as pictures and asserting how the solver walks them.

use mazewalk_core::{CellState, Grid, Position};

use crate::{MazeSolver, StepAction, StepReport};

/// A test harness wrapping a [`MazeSolver`].
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct MazeTester {
    solver: MazeSolver,
    last_report: Option<StepReport>,
}

impl MazeTester {
    /// Creates a new tester for a grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            solver: MazeSolver::new(grid),
            last_report: None,
        }
    }

    /// Creates a new tester from a maze picture.
    ///
    /// Each non-blank line is one row; cells are separated by whitespace:
    /// - `#` is a wall
    /// - `.` is open floor
    /// - `S` is the start
    /// - `F` is the finish
    ///
    /// # Panics
    ///
    /// Panics if the picture is ragged, contains unknown symbols, or does not
    /// hold exactly one start and one finish.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        let rows: Vec<Vec<&str>> = s
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;
        let mut finish = None;
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "row {y} has {} cells, expected {width}", row.len());
            for (x, symbol) in row.iter().enumerate() {
                let pos = Position::new(x, y);
                let state = match *symbol {
                    "#" => CellState::Wall,
                    "." => CellState::Open,
                    "S" => {
                        assert!(start.replace(pos).is_none(), "more than one start");
                        CellState::Open
                    }
                    "F" => {
                        assert!(finish.replace(pos).is_none(), "more than one finish");
                        CellState::Open
                    }
                    other => panic!("unknown maze symbol `{other}` at {pos}"),
                };
                cells.push(state);
            }
        }

        let start = start.expect("maze picture has no start");
        let finish = finish.expect("maze picture has no finish");
        Self::new(Grid::new(cells, width, height, start, finish).unwrap())
    }

    /// Runs the solver to completion.
    pub fn solve(mut self) -> Self {
        self.solver.solve();
        self
    }

    /// Performs a single solver iteration.
    ///
    /// # Panics
    ///
    /// Panics if the solver has already terminated.
    #[track_caller]
    pub fn step(mut self) -> Self {
        let report = self.solver.step_verbose();
        assert!(report.is_some(), "solver has already terminated");
        self.last_report = report;
        self
    }

    /// Asserts that the most recent [`step`](Self::step) performed `expected`.
    #[track_caller]
    pub fn assert_last_action(self, expected: StepAction) -> Self {
        let Some(report) = &self.last_report else {
            panic!("no step has been taken yet");
        };
        assert_eq!(
            report.action, expected,
            "unexpected action at move {}",
            report.move_number
        );
        self
    }

    /// Asserts that the solver reached the finish along exactly `expected`.
    #[track_caller]
    pub fn assert_solved_path<I>(self, expected: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        assert!(
            self.solver.state().is_solved(),
            "expected a solved maze, solver is {:?}\n{}",
            self.solver.state(),
            self.solver.render().join("\n")
        );
        self.assert_path(expected)
    }

    /// Asserts that the solver exhausted every branch.
    #[track_caller]
    pub fn assert_failed(self) -> Self {
        assert!(
            self.solver.state().is_failed(),
            "expected a failed walk, solver is {:?}\n{}",
            self.solver.state(),
            self.solver.render().join("\n")
        );
        self
    }

    /// Asserts the current path stack, bottom first.
    #[track_caller]
    pub fn assert_path<I>(self, expected: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let expected: Vec<Position> = expected.into_iter().map(Position::from).collect();
        assert_eq!(self.solver.path(), expected, "unexpected path");
        self
    }

    /// Asserts the number of iterations performed so far.
    #[track_caller]
    pub fn assert_move_count(self, expected: usize) -> Self {
        assert_eq!(self.solver.move_count(), expected, "unexpected move count");
        self
    }

    /// Asserts the cursor position.
    #[track_caller]
    pub fn assert_cursor(self, expected: (usize, usize)) -> Self {
        assert_eq!(self.solver.cursor(), Position::from(expected), "unexpected cursor");
        self
    }

    /// Asserts the state of a single cell.
    #[track_caller]
    pub fn assert_cell(self, pos: (usize, usize), expected: CellState) -> Self {
        let pos = Position::from(pos);
        assert_eq!(
            self.solver.grid().state_at(pos),
            Ok(expected),
            "unexpected state at {pos}"
        );
        self
    }
}

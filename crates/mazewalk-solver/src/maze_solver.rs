use mazewalk_core::{CellState, Direction, Grid, Position};

use crate::{StepAction, StepReport};

/// Lifecycle of a [`MazeSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolverState {
    /// The walk is still in progress.
    Exploring,
    /// The cursor reached the finish.
    Solved,
    /// Every branch reachable from the start was exhausted.
    Failed,
}

/// The result of a completed walk.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// The finish was reached.
    Solved {
        /// The route from start to finish, both included.
        path: Vec<Position>,
        /// Number of loop iterations taken.
        move_count: usize,
    },
    /// The finish is unreachable from the start.
    Failed {
        /// Number of loop iterations taken.
        move_count: usize,
    },
}

impl Outcome {
    /// Returns the solution path, if the maze was solved.
    #[must_use]
    pub fn path(&self) -> Option<&[Position]> {
        match self {
            Self::Solved { path, .. } => Some(path),
            Self::Failed { .. } => None,
        }
    }

    /// Returns the number of loop iterations the walk took.
    #[must_use]
    pub fn move_count(&self) -> usize {
        match self {
            Self::Solved { move_count, .. } | Self::Failed { move_count } => *move_count,
        }
    }
}

/// A depth-first maze walker with an explicit backtrack stack.
///
/// The solver owns its [`Grid`] for its whole lifetime, so no other walker can
/// observe or disturb the cells it marks as visited.
///
/// Each iteration does exactly one of the following, checked in this order:
///
/// 1. **Win**: if a neighbor of the cursor is the finish, move onto it and stop.
/// 2. **Advance**: move onto the first open neighbor, push it on the path and
///    mark it [`CellState::Visited`].
/// 3. **Backtrack**: pop the path and move the cursor to the new top. The
///    abandoned cell stays visited, so dead ends are never re-explored.
/// 4. **Fail**: with only the start left on the path, stop.
///
/// Neighbors are always examined clockwise from north
/// ([`Direction::CLOCKWISE`]). Because every open cell is entered at most once
/// and left at most once, a walk takes at most `2 × open cells + 1` iterations.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Grid, Position};
/// use mazewalk_solver::{MazeSolver, Outcome};
///
/// // The start is walled in on every side.
/// let grid: Grid = "3 3\n1 1\n2 2\n1 0 1\n0 1 0\n1 0 1\n".parse()?;
/// let mut solver = MazeSolver::new(grid);
///
/// assert_eq!(solver.solve(), Outcome::Failed { move_count: 1 });
/// assert_eq!(solver.path(), [Position::new(1, 1)]);
/// # Ok::<(), mazewalk_core::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MazeSolver {
    grid: Grid,
    cursor: Position,
    path: Vec<Position>,
    state: SolverState,
    move_count: usize,
}

impl MazeSolver {
    /// Creates a solver positioned at the grid's start.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let start = grid.start();
        Self {
            grid,
            cursor: start,
            path: vec![start],
            state: SolverState::Exploring,
            move_count: 0,
        }
    }

    /// Returns the grid, including the cells marked during the walk.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the solver and returns its grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Returns the current cursor position.
    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the path stack, bottom (start) first.
    ///
    /// While exploring, the last element is always the cursor.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Returns the number of iterations performed so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the outcome once the walk has terminated, or `None` while exploring.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SolverState::Exploring => None,
            SolverState::Solved => Some(Outcome::Solved {
                path: self.path.clone(),
                move_count: self.move_count,
            }),
            SolverState::Failed => Some(Outcome::Failed {
                move_count: self.move_count,
            }),
        }
    }

    /// Renders the grid with the cursor drawn as `C`.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.grid.render(Some(self.cursor))
    }

    /// Runs the walk until it is solved or exhausted.
    ///
    /// Calling this again after termination returns the same outcome without
    /// doing any further work.
    pub fn solve(&mut self) -> Outcome {
        loop {
            if let Some(outcome) = self.outcome() {
                return outcome;
            }
            self.advance();
        }
    }

    /// Performs exactly one iteration and reports what it did.
    ///
    /// Returns `None` once the walk has terminated. Driving the solver with
    /// this method visits the same cells, in the same order, as [`solve`](Self::solve).
    pub fn step_verbose(&mut self) -> Option<StepReport> {
        let action = self.advance()?;
        Some(StepReport {
            move_number: self.move_count,
            action,
            cursor: self.cursor,
            path: self.path.clone(),
        })
    }

    /// Restores the solver and grid to their state before the first iteration.
    ///
    /// Every visited cell becomes open again; walls, start and finish are
    /// left untouched.
    pub fn reset(&mut self) {
        let visited: Vec<Position> = self
            .grid
            .positions()
            .filter(|&pos| self.grid.state_at(pos) == Ok(CellState::Visited))
            .collect();
        for &pos in &visited {
            self.mark(pos, CellState::Open);
        }

        let start = self.grid.start();
        self.cursor = start;
        self.path.clear();
        self.path.push(start);
        self.state = SolverState::Exploring;
        self.move_count = 0;
        log::debug!("solver reset, {} visited cells reopened", visited.len());
    }

    fn advance(&mut self) -> Option<StepAction> {
        if !self.state.is_exploring() {
            return None;
        }
        debug_assert_eq!(self.path.last(), Some(&self.cursor));

        self.move_count += 1;
        let action = if let Some((_, finish)) = self.find_neighbor(CellState::Finish) {
            self.cursor = finish;
            self.path.push(finish);
            self.state = SolverState::Solved;
            StepAction::Won(finish)
        } else if let Some((direction, next)) = self.find_neighbor(CellState::Open) {
            self.cursor = next;
            self.path.push(next);
            self.mark(next, CellState::Visited);
            StepAction::Advanced {
                direction,
                to: next,
            }
        } else if let [.., to, from] = self.path[..] {
            self.path.pop();
            self.cursor = to;
            StepAction::Backtracked { from, to }
        } else {
            self.state = SolverState::Failed;
            StepAction::Exhausted
        };

        match self.state {
            SolverState::Solved => log::debug!(
                "solved after {} moves with a path of {} cells",
                self.move_count,
                self.path.len()
            ),
            SolverState::Failed => log::debug!("exhausted after {} moves", self.move_count),
            SolverState::Exploring => {}
        }
        Some(action)
    }

    fn find_neighbor(&self, state: CellState) -> Option<(Direction, Position)> {
        Direction::CLOCKWISE.into_iter().find_map(|direction| {
            let next = self.grid.neighbor(self.cursor, direction)?;
            (self.grid.state_at(next) == Ok(state)).then_some((direction, next))
        })
    }

    fn mark(&mut self, pos: Position, state: CellState) {
        let marked = self.grid.set_state(pos, state);
        debug_assert!(marked.is_ok(), "{pos} lies outside the grid");
    }
}

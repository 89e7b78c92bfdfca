//! The rectangular maze grid.

use std::fmt::{self, Display};

use crate::{CellState, Direction, Position};

/// Errors raised when building or addressing a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The supplied cell data does not match `width × height`, or a dimension is zero.
    #[display("invalid dimensions: {width}x{height} grid cannot hold {cells} cells")]
    InvalidDimensions {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
        /// Number of cells actually supplied.
        cells: usize,
    },
    /// A coordinate lies outside `[0, width) × [0, height)`.
    #[display("position {position} is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        /// The rejected coordinate.
        position: Position,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// Start and finish were declared on the same cell.
    #[display("start and finish both lie at {position}")]
    StartIsFinish {
        /// The shared coordinate.
        position: Position,
    },
    /// The supplied cells carry a start or finish marker away from the declared one.
    #[display("unexpected {state:?} marker at {position}")]
    StrayMarker {
        /// Where the marker was found.
        position: Position,
        /// The marker found there.
        state: CellState,
    },
}

/// A fixed-shape grid of [`CellState`]s with a designated start and finish.
///
/// The shape never changes after construction; cell contents are mutated by
/// the solver while it walks the maze. Cells are stored row-major.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{CellState, Grid, Position};
///
/// use mazewalk_core::CellState::{Open as O, Wall as W};
/// let mut grid = Grid::new(
///     vec![O, O, O, W, O, O],
///     3,
///     2,
///     Position::new(0, 0),
///     Position::new(2, 1),
/// )?;
///
/// grid.set_state(Position::new(1, 0), CellState::Visited)?;
/// assert_eq!(grid.render(Some(Position::new(1, 0))), ["4 C 1", "0 1 5"]);
/// assert!(grid.state_at(Position::new(3, 0)).is_err());
/// # Ok::<(), mazewalk_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
    start: Position,
    finish: Position,
}

impl Grid {
    /// Creates a grid from row-major cell data.
    ///
    /// After validation the `start` and `finish` cells are overwritten with
    /// [`CellState::Start`] and [`CellState::Finish`].
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidDimensions`] if a dimension is zero or
    ///   `cells.len() != width * height`.
    /// - [`GridError::OutOfBounds`] if `start` or `finish` lies outside the grid.
    /// - [`GridError::StartIsFinish`] if `start == finish`.
    /// - [`GridError::StrayMarker`] if any other cell is already `Start` or `Finish`.
    pub fn new(
        cells: Vec<CellState>,
        width: usize,
        height: usize,
        start: Position,
        finish: Position,
    ) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions {
            width,
            height,
            cells: cells.len(),
        };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(invalid);
        }

        let mut grid = Self {
            width,
            height,
            cells,
            start,
            finish,
        };
        grid.check_bounds(start)?;
        grid.check_bounds(finish)?;
        if start == finish {
            return Err(GridError::StartIsFinish { position: start });
        }
        if let Some(position) = grid
            .positions()
            .filter(|&pos| pos != start && pos != finish)
            .find(|&pos| matches!(grid.cell(pos), CellState::Start | CellState::Finish))
        {
            return Err(GridError::StrayMarker {
                position,
                state: grid.cell(position),
            });
        }

        let (start_index, finish_index) = (grid.index(start), grid.index(finish));
        grid.cells[start_index] = CellState::Start;
        grid.cells[finish_index] = CellState::Finish;
        Ok(grid)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the start coordinate.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the finish coordinate.
    #[must_use]
    pub fn finish(&self) -> Position {
        self.finish
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Returns the state stored at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` lies outside the grid.
    pub fn state_at(&self, pos: Position) -> Result<CellState, GridError> {
        self.check_bounds(pos)?;
        Ok(self.cell(pos))
    }

    /// Overwrites the state stored at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` lies outside the grid.
    pub fn set_state(&mut self, pos: Position, state: CellState) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        let index = self.index(pos);
        self.cells[index] = state;
        Ok(())
    }

    /// Returns the in-bounds neighbor of `pos` in `direction`, if any.
    #[must_use]
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|&next| self.contains(next))
    }

    /// Iterates over every coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Counts the cells currently in `state`.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Renders the grid as display rows, top to bottom.
    ///
    /// Each row lists the cell symbols left to right separated by single
    /// spaces. When `cursor` is given and in bounds, that cell is drawn as
    /// `C` instead of its stored state.
    #[must_use]
    pub fn render(&self, cursor: Option<Position>) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .enumerate()
            .map(|(y, row)| {
                let symbols: Vec<String> = row
                    .iter()
                    .enumerate()
                    .map(|(x, cell)| {
                        if cursor == Some(Position::new(x, y)) {
                            "C".to_owned()
                        } else {
                            cell.to_string()
                        }
                    })
                    .collect();
                symbols.join(" ")
            })
            .collect()
    }

    fn check_bounds(&self, pos: Position) -> Result<(), GridError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos));
        pos.y() * self.width + pos.x()
    }

    fn cell(&self, pos: Position) -> CellState {
        self.cells[self.index(pos)]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render(None) {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

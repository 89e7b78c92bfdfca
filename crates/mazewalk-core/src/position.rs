//! Grid coordinates and compass directions.

use std::fmt::{self, Display};

/// A zero-indexed grid coordinate, column first.
///
/// `x` grows to the east and `y` grows to the south, so `(0, 0)` is the
/// top-left cell of a rendered maze.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Direction, Position};
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.step(Direction::East), Some(Position::new(3, 0)));
/// assert_eq!(pos.step(Direction::North), None);
/// assert_eq!(pos.to_string(), "(2, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a position from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the position one cell away in `direction`.
    ///
    /// Returns `None` when the move would leave the non-negative quadrant.
    /// Upper bounds are the grid's business; see [`Grid::neighbor`].
    ///
    /// [`Grid::neighbor`]: crate::Grid::neighbor
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self { x, y })
    }

    /// Returns `true` if `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// One of the four orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// Towards row 0.
    #[display("north")]
    North,
    /// Towards higher columns.
    #[display("east")]
    East,
    /// Towards higher rows.
    #[display("south")]
    South,
    /// Towards column 0.
    #[display("west")]
    West,
}

impl Direction {
    /// The examination order used for both win checks and move selection:
    /// clockwise, starting at north.
    pub const CLOCKWISE: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the `(dx, dy)` unit offset of this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazewalk_core::Direction;
    ///
    /// assert_eq!(Direction::North.delta(), (0, -1));
    /// assert_eq!(Direction::West.delta(), (-1, 0));
    /// ```
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

//! Cell categories.

use std::fmt::{self, Display};

/// The semantic category of a grid cell.
///
/// Solver decisions only ever look at these categories; the single-character
/// [`symbol`](Self::symbol) is a display concern.
///
/// # Examples
///
/// ```
/// use mazewalk_core::CellState;
///
/// assert!(CellState::Open.is_open());
/// assert_eq!(CellState::from_code(0), Some(CellState::Wall));
/// assert_eq!(CellState::from_code(7), None);
/// assert_eq!(CellState::Finish.to_string(), "5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellState {
    /// Not traversable.
    Wall,
    /// Traversable and not yet explored.
    Open,
    /// Explored; only reachable again by backtracking.
    Visited,
    /// The cell the walk starts from.
    Start,
    /// The cell the walk is looking for.
    Finish,
}

impl CellState {
    /// All cell states.
    pub const ALL: [Self; 5] = [
        Self::Wall,
        Self::Open,
        Self::Visited,
        Self::Start,
        Self::Finish,
    ];

    /// Maps a raw maze-file code (`0` wall, `1` open) to a cell state.
    ///
    /// Start and finish are never encoded in the cell rows, so every other
    /// code yields `None`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Wall),
            1 => Some(Self::Open),
            _ => None,
        }
    }

    /// Returns the character used when rendering this state.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '0',
            Self::Open => '1',
            Self::Visited => '2',
            Self::Start => '4',
            Self::Finish => '5',
        }
    }
}

impl Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.symbol(), f)
    }
}

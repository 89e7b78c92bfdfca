use mazewalk_core::{Direction, Position};

/// What a single solver iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum StepAction {
    /// The finish was adjacent and the cursor moved onto it.
    #[display("reached the finish at {_0}")]
    Won(Position),
    /// The cursor moved onto an unexplored cell, which is now visited.
    #[display("moved {direction} to {to}")]
    Advanced {
        /// Direction of the move.
        direction: Direction,
        /// The newly visited cell.
        to: Position,
    },
    /// The cursor retreated one cell along the path.
    #[display("backtracked from {from} to {to}")]
    Backtracked {
        /// The dead-end cell that was popped from the path.
        from: Position,
        /// The new top of the path.
        to: Position,
    },
    /// Nothing left to explore and nowhere to retreat to.
    #[display("no moves left at the start")]
    Exhausted,
}

/// A trace of one solver iteration, produced by
/// [`MazeSolver::step_verbose`](crate::MazeSolver::step_verbose).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based number of this iteration.
    pub move_number: usize,
    /// What the iteration did.
    pub action: StepAction,
    /// Cursor position after the iteration.
    pub cursor: Position,
    /// Path stack after the iteration, bottom (start) first.
    pub path: Vec<Position>,
}

impl StepReport {
    /// Returns `true` if the cursor moved forward (onto the finish or a new cell).
    #[must_use]
    pub fn moved(&self) -> bool {
        matches!(self.action, StepAction::Won(_) | StepAction::Advanced { .. })
    }

    /// Returns `true` if this iteration reached the finish.
    #[must_use]
    pub fn won(&self) -> bool {
        self.action.is_won()
    }

    /// Returns `true` if this iteration exhausted the search.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.action.is_exhausted()
    }
}

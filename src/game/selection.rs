use std::mem;

use crate::models::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    /// A drag gesture is in progress; the first cell is the anchor.
    Selecting(Vec<Position>),
}

/// Accumulates the cells of one drag gesture.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    state: SelectionState,
}

/// True when `cell` lies on a horizontal, vertical or diagonal line
/// through `anchor`.
pub fn is_straight_line(anchor: Position, cell: Position) -> bool {
    let (row_delta, col_delta) = cell.delta_from(anchor);
    row_delta == 0 || col_delta == 0 || row_delta.abs() == col_delta.abs()
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.state, SelectionState::Selecting(_))
    }

    /// Cells of the gesture in progress; empty while idle.
    pub fn cells(&self) -> &[Position] {
        match &self.state {
            SelectionState::Idle => &[],
            SelectionState::Selecting(cells) => cells,
        }
    }

    /// Begin a gesture at `cell`. A gesture already in progress is dropped.
    pub fn start(&mut self, cell: Position) {
        if self.is_selecting() {
            tracing::debug!("Restarting selection at {}", cell);
        }
        self.state = SelectionState::Selecting(vec![cell]);
    }

    /// Try to add `cell` to the gesture. Returns whether it was appended.
    ///
    /// The second cell sets the gesture's direction. After that a cell is
    /// only taken when it lies on a straight line from the anchor and is
    /// not already selected; anything else is ignored without aborting.
    pub fn extend(&mut self, cell: Position) -> bool {
        let SelectionState::Selecting(cells) = &mut self.state else {
            return false;
        };
        let anchor = cells[0];

        if cells.len() == 1 {
            if cell == anchor {
                return false;
            }
            cells.push(cell);
            return true;
        }

        if !is_straight_line(anchor, cell) || cells.contains(&cell) {
            return false;
        }
        cells.push(cell);
        true
    }

    /// End the gesture and hand back its cells. `None` when idle.
    pub fn release(&mut self) -> Option<Vec<Position>> {
        match mem::take(&mut self.state) {
            SelectionState::Idle => None,
            SelectionState::Selecting(cells) => Some(cells),
        }
    }

    /// Pointer focus lost mid-gesture; same as a release.
    pub fn focus_lost(&mut self) -> Option<Vec<Position>> {
        self.release()
    }
}

use serde::Serialize;

use crate::{
    events::{PlayerEvent, SessionUpdate},
    game::{
        progress::{Progress, ProgressTracker},
        selection::SelectionTracker,
        solutions::SolutionIndex,
        validator::{FoundWords, MatchOutcome, MatchValidator},
    },
    models::{Position, Puzzle},
};

/// Consistent view of a session's play state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub selection: Vec<Position>,
    pub found_words: Vec<String>,
    pub highlighted_cells: Vec<Position>,
    pub progress: Progress,
}

/// One player working through one puzzle.
///
/// Owns the selection gesture, the found words and the highlighted
/// cells, so validation and progress always see the same state.
pub struct PuzzleSession {
    puzzle: Puzzle,
    index: SolutionIndex,
    tracker: SelectionTracker,
    found: FoundWords,
    progress: Progress,
}

impl PuzzleSession {
    pub fn new(puzzle: Puzzle) -> Self {
        let index = SolutionIndex::build(&puzzle);
        let progress = ProgressTracker::compute(0, puzzle.words.len());
        tracing::info!(
            "Session started: {}x{} grid, {} words",
            puzzle.grid.rows(),
            puzzle.grid.cols(),
            puzzle.words.len()
        );

        Self {
            puzzle,
            index,
            tracker: SelectionTracker::new(),
            found: FoundWords::new(),
            progress,
        }
    }

    /// Swap in a new puzzle; all play state starts over.
    pub fn load(&mut self, puzzle: Puzzle) {
        *self = Self::new(puzzle);
    }

    /// Clear play state but keep the puzzle.
    pub fn reset(&mut self) {
        self.tracker = SelectionTracker::new();
        self.found.clear();
        self.refresh_progress();
        tracing::debug!("Session reset");
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn solutions(&self) -> &SolutionIndex {
        &self.index
    }

    pub fn selection(&self) -> &[Position] {
        self.tracker.cells()
    }

    pub fn is_selecting(&self) -> bool {
        self.tracker.is_selecting()
    }

    pub fn found_words(&self) -> &[String] {
        self.found.words()
    }

    pub fn highlighted_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.found.highlighted().iter().copied()
    }

    pub fn is_highlighted(&self, cell: Position) -> bool {
        self.found.highlighted().contains(&cell)
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress.complete
    }

    /// Pointer pressed on `cell`. Returns false for cells off the grid.
    pub fn cell_down(&mut self, cell: Position) -> bool {
        if !self.puzzle.grid.contains(cell) {
            tracing::debug!("Ignoring press outside the grid at {}", cell);
            return false;
        }
        self.tracker.start(cell);
        true
    }

    /// Pointer dragged onto `cell`. Returns whether the selection grew.
    pub fn cell_enter(&mut self, cell: Position) -> bool {
        if !self.puzzle.grid.contains(cell) {
            return false;
        }
        self.tracker.extend(cell)
    }

    /// Finish the gesture and check it against the unfound solutions.
    pub fn release(&mut self) -> MatchOutcome {
        let Some(selection) = self.tracker.release() else {
            return MatchOutcome::Idle;
        };

        let outcome = MatchValidator::validate(selection, &self.index, &mut self.found);
        if let MatchOutcome::Matched(path) = &outcome {
            self.refresh_progress();
            tracing::info!(
                "Found {} ({}/{})",
                path.word,
                self.progress.found,
                self.progress.total
            );
            if self.progress.complete {
                tracing::info!("Puzzle completed");
            }
        }
        outcome
    }

    pub fn focus_lost(&mut self) -> MatchOutcome {
        self.release()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selection: self.selection().to_vec(),
            found_words: self.found.words().to_vec(),
            highlighted_cells: self.highlighted_cells().collect(),
            progress: self.progress,
        }
    }

    /// Apply one input event and report what changed.
    pub fn handle(&mut self, event: PlayerEvent) -> Vec<SessionUpdate> {
        match event {
            PlayerEvent::CellDown { row, col } => {
                if self.cell_down(Position::new(row, col)) {
                    vec![self.selection_update()]
                } else {
                    Vec::new()
                }
            }
            PlayerEvent::CellEnter { row, col } => {
                if self.cell_enter(Position::new(row, col)) {
                    vec![self.selection_update()]
                } else {
                    Vec::new()
                }
            }
            PlayerEvent::Release => self.finish_gesture(false),
            PlayerEvent::FocusLost => self.finish_gesture(true),
            PlayerEvent::Reset => {
                self.reset();
                vec![
                    SessionUpdate::puzzle_loaded(&self.puzzle),
                    SessionUpdate::progress(&self.progress),
                ]
            }
        }
    }

    fn finish_gesture(&mut self, focus_lost: bool) -> Vec<SessionUpdate> {
        let outcome = if focus_lost {
            self.focus_lost()
        } else {
            self.release()
        };

        let mut updates = match outcome {
            MatchOutcome::Idle => return Vec::new(),
            MatchOutcome::TooShort => Vec::new(),
            MatchOutcome::NoMatch(cells) => vec![SessionUpdate::NoMatch { cells }],
            MatchOutcome::Matched(path) => {
                let mut updates = vec![
                    SessionUpdate::WordFound {
                        word: path.word,
                        positions: path.positions,
                    },
                    SessionUpdate::progress(&self.progress),
                ];
                if self.progress.complete {
                    updates.push(SessionUpdate::Completed {
                        total: self.progress.total,
                    });
                }
                updates
            }
        };
        updates.push(self.selection_update());
        updates
    }

    fn selection_update(&self) -> SessionUpdate {
        SessionUpdate::SelectionChanged {
            cells: self.selection().to_vec(),
        }
    }

    fn refresh_progress(&mut self) {
        self.progress = ProgressTracker::for_words(&self.found, &self.puzzle.words);
    }
}

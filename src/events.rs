use serde::{Deserialize, Serialize};

use crate::{
    game::progress::Progress,
    models::{Position, Puzzle},
};

/// Input events sent by the view layer to a play session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerEvent {
    CellDown { row: usize, col: usize },
    CellEnter { row: usize, col: usize },
    Release,
    FocusLost,
    Reset,
}

/// Updates emitted by a play session back to the view layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionUpdate {
    PuzzleLoaded {
        title: Option<String>,
        grid: Vec<String>,
        words: Vec<String>,
        unsolvable: Vec<String>,
    },
    SelectionChanged {
        cells: Vec<Position>,
    },
    WordFound {
        word: String,
        positions: Vec<Position>,
    },
    NoMatch {
        cells: Vec<Position>,
    },
    Progress {
        found: usize,
        total: usize,
        percent: f64,
    },
    Completed {
        total: usize,
    },
    Error {
        message: String,
    },
}

impl SessionUpdate {
    pub fn puzzle_loaded(puzzle: &Puzzle) -> Self {
        SessionUpdate::PuzzleLoaded {
            title: puzzle.meta.title.clone(),
            grid: puzzle.grid.to_row_strings(),
            words: puzzle.words.clone(),
            unsolvable: puzzle.unsolvable_words().into_iter().map(String::from).collect(),
        }
    }

    pub fn progress(progress: &Progress) -> Self {
        SessionUpdate::Progress {
            found: progress.found,
            total: progress.total,
            percent: progress.percent,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        SessionUpdate::Error {
            message: message.into(),
        }
    }
}

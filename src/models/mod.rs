pub mod document;
pub mod puzzle;

pub use document::{GridDocument, PositionDocument, PuzzleDocument, SolutionDocument};
pub use puzzle::{
    // Board
    Direction, Grid, Position,
    // Puzzle content
    normalize_word, PathDefect, Puzzle, PuzzleMeta, SolutionPath,
};

pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod models;
pub mod utils;
pub mod wordlist;

pub use error::{PuzzleError, Result};
pub use events::{PlayerEvent, SessionUpdate};
pub use game::{
    GeneratorConfig, MatchOutcome, MatchValidator, Progress, ProgressTracker, PuzzleGridGenerator,
    PuzzleSession, SelectionTracker, SolutionIndex,
};
pub use models::{Direction, Grid, Position, Puzzle, PuzzleMeta, SolutionPath};
pub use wordlist::WordList;

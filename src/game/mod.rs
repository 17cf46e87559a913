// Word-search engine: generation, solution lookup and play validation

pub mod generator;
pub mod progress;
pub mod selection;
pub mod session;
pub mod solutions;
pub mod validator;

pub use generator::{GeneratorConfig, PuzzleGridGenerator};
pub use progress::{Progress, ProgressTracker};
pub use selection::{SelectionState, SelectionTracker};
pub use session::{PuzzleSession, SessionSnapshot};
pub use solutions::{derive_horizontal, SolutionIndex};
pub use validator::{FoundWords, MatchOutcome, MatchValidator};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::error::{PuzzleError, Result};

/// Zero-based `(row, col)` address of a grid cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Walk `distance` steps of `(d_row, d_col)` from this position.
    /// Returns `None` when the walk leaves the top or left edge.
    pub fn offset(self, d_row: isize, d_col: isize, distance: usize) -> Option<Self> {
        let distance = distance as isize;
        let row = self.row as isize + d_row * distance;
        let col = self.col as isize + d_col * distance;

        if row < 0 || col < 0 {
            None
        } else {
            Some(Self::new(row as usize, col as usize))
        }
    }

    /// Signed `(row, col)` difference of this position from `anchor`.
    pub fn delta_from(self, anchor: Position) -> (isize, isize) {
        (
            self.row as isize - anchor.row as isize,
            self.col as isize - anchor.col as isize,
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a word runs in, in its reading order.
///
/// The four forward directions are the undirected placement set; the
/// reversed variants only appear when backwards placement is enabled.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
    HorizontalReversed,
    VerticalReversed,
    DiagonalDownReversed,
    DiagonalUpReversed,
}

impl Direction {
    pub const FORWARD: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
        Direction::HorizontalReversed,
        Direction::VerticalReversed,
        Direction::DiagonalDownReversed,
        Direction::DiagonalUpReversed,
    ];

    /// Unit `(d_row, d_col)` step between consecutive letters.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
            Direction::HorizontalReversed => (0, -1),
            Direction::VerticalReversed => (-1, 0),
            Direction::DiagonalDownReversed => (-1, -1),
            Direction::DiagonalUpReversed => (1, -1),
        }
    }

    pub fn from_step(step: (isize, isize)) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.step() == step)
    }

    pub fn reversed(self) -> Self {
        let (d_row, d_col) = self.step();
        match Self::from_step((-d_row, -d_col)) {
            Some(direction) => direction,
            None => self,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalDown => "diagonal-down",
            Direction::DiagonalUp => "diagonal-up",
            Direction::HorizontalReversed => "horizontal-reversed",
            Direction::VerticalReversed => "vertical-reversed",
            Direction::DiagonalDownReversed => "diagonal-down-reversed",
            Direction::DiagonalUpReversed => "diagonal-up-reversed",
        }
    }

    /// Parse a direction label leniently. Unknown labels yield `None`
    /// since the direction is informational only.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rectangular letter matrix. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid, rejecting empty or ragged input.
    pub fn from_cells(cells: Vec<Vec<char>>) -> Result<Self> {
        let Some(first) = cells.first() else {
            return Err(PuzzleError::invalid("grid has no rows"));
        };

        let cols = first.len();
        if cols == 0 {
            return Err(PuzzleError::invalid("grid rows are empty"));
        }

        if let Some(row) = cells.iter().position(|row| row.len() != cols) {
            return Err(PuzzleError::invalid(format!(
                "grid row {} has {} cells, expected {}",
                row,
                cells[row].len(),
                cols
            )));
        }

        Ok(Self { cells })
    }

    /// Build a grid from per-row strings, one cell per character.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Self::from_cells(
            rows.iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Read the letters at `positions` in order.
    pub fn spell(&self, positions: &[Position]) -> Option<String> {
        positions.iter().map(|&pos| self.get(pos)).collect()
    }

    pub fn to_row_strings(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Why a solution path does not spell its word on a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathDefect {
    #[error("path has no positions")]
    Empty,

    #[error("path has {actual} positions for a {expected}-letter word")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),

    #[error("step {index} breaks the straight line")]
    BrokenStep { index: usize },

    #[error("path spells {found:?}")]
    WrongLetters { found: String },
}

/// Canonical ordered cell sequence spelling a target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath {
    pub word: String,
    /// Informational; matching compares positions only.
    pub direction: Option<Direction>,
    pub positions: Vec<Position>,
}

impl SolutionPath {
    pub fn new(word: impl Into<String>, direction: Option<Direction>, positions: Vec<Position>) -> Self {
        Self {
            word: word.into(),
            direction,
            positions,
        }
    }

    /// Placeholder for a word that cannot be located. Never matches.
    pub fn unsolvable(word: impl Into<String>) -> Self {
        Self::new(word, None, Vec::new())
    }

    pub fn is_usable(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Verify the path against `grid`: one cell per letter, a constant
    /// unit step between cells, and the cells spell the word.
    pub fn check(&self, grid: &Grid) -> std::result::Result<(), PathDefect> {
        let expected = self.word.chars().count();
        if self.positions.is_empty() {
            return Err(PathDefect::Empty);
        }
        if self.positions.len() != expected {
            return Err(PathDefect::LengthMismatch {
                expected,
                actual: self.positions.len(),
            });
        }
        if let Some(&pos) = self.positions.iter().find(|&&pos| !grid.contains(pos)) {
            return Err(PathDefect::OutOfBounds(pos));
        }

        if self.positions.len() > 1 {
            let step = self.positions[1].delta_from(self.positions[0]);
            if Direction::from_step(step).is_none() {
                return Err(PathDefect::BrokenStep { index: 1 });
            }
            for (index, pair) in self.positions.windows(2).enumerate() {
                if pair[1].delta_from(pair[0]) != step {
                    return Err(PathDefect::BrokenStep { index: index + 1 });
                }
            }
        }

        let found = grid.spell(&self.positions).unwrap_or_default();
        if found != self.word {
            return Err(PathDefect::WrongLetters { found });
        }

        Ok(())
    }
}

/// Canonical word form: upper-cased, everything that is not a letter dropped.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Informational puzzle metadata; never consulted by play logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleMeta {
    #[serde(default, alias = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, alias = "materia", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, alias = "nivel", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, alias = "tema", skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, alias = "dificultad", skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(
        default,
        rename = "wordCount",
        alias = "word_count",
        alias = "cantidadPalabras",
        skip_serializing_if = "Option::is_none"
    )]
    pub word_count: Option<usize>,
    #[serde(
        default,
        rename = "gridSize",
        alias = "grid_size",
        alias = "tamanoCuadricula",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_size: Option<usize>,
}

/// A word-search puzzle. Produced once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub meta: PuzzleMeta,
    pub words: Vec<String>,
    pub grid: Grid,
    pub solutions: Vec<SolutionPath>,
}

impl Puzzle {
    /// Words with no usable solution path in `solutions`.
    pub fn unsolvable_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|word| {
                !self
                    .solutions
                    .iter()
                    .any(|path| &path.word == *word && path.is_usable())
            })
            .map(String::as_str)
            .collect()
    }

    /// Check every usable solution against the grid.
    pub fn validate_solutions(&self) -> Vec<(String, PathDefect)> {
        self.solutions
            .iter()
            .filter(|path| path.is_usable())
            .filter_map(|path| path.check(&self.grid).err().map(|e| (path.word.clone(), e)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_grid() -> Grid {
        Grid::from_rows(&["CATX", "XXXX", "XXXX", "XXXX"]).unwrap()
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(2, 2);
        assert_eq!(pos.offset(-1, 1, 2), Some(Position::new(0, 4)));
        assert_eq!(pos.offset(-1, 0, 3), None);
        assert_eq!(Position::new(3, 1).delta_from(Position::new(1, 2)), (2, -1));
    }

    #[test]
    fn test_direction_steps() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_step(direction.step()), Some(direction));
            assert_eq!(direction.reversed().reversed(), direction);
        }
        assert_eq!(Direction::Horizontal.reversed(), Direction::HorizontalReversed);
        assert_eq!(Direction::from_step((0, 0)), None);
        assert_eq!(Direction::from_step((2, 2)), None);
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(Direction::from_label("diagonal-up"), Some(Direction::DiagonalUp));
        assert_eq!(Direction::from_label(" Diagonal_Down "), Some(Direction::DiagonalDown));
        assert_eq!(Direction::from_label("sideways"), None);
        assert_eq!(
            serde_json::to_string(&Direction::VerticalReversed).unwrap(),
            "\"vertical-reversed\""
        );
    }

    #[test]
    fn test_grid_rejects_ragged_rows() {
        assert!(Grid::from_rows(&["ABC", "DE"]).is_err());
        assert!(Grid::from_rows::<&str>(&[]).is_err());
        assert!(Grid::from_rows(&[""]).is_err());
    }

    #[test]
    fn test_grid_spell() {
        let grid = cat_grid();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 4);
        let path = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        assert_eq!(grid.spell(&path).as_deref(), Some("CAT"));
        assert_eq!(grid.spell(&[Position::new(4, 0)]), None);
    }

    #[test]
    fn test_solution_path_check() {
        let grid = cat_grid();
        let good = SolutionPath::new(
            "CAT",
            Some(Direction::Horizontal),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
        );
        assert_eq!(good.check(&grid), Ok(()));

        let reversed = SolutionPath::new(
            "TAC",
            None,
            vec![Position::new(0, 2), Position::new(0, 1), Position::new(0, 0)],
        );
        assert_eq!(reversed.check(&grid), Ok(()));

        let bent = SolutionPath::new(
            "CAX",
            None,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)],
        );
        assert_eq!(bent.check(&grid), Err(PathDefect::BrokenStep { index: 2 }));

        let short = SolutionPath::new("CAT", None, vec![Position::new(0, 0)]);
        assert!(matches!(short.check(&grid), Err(PathDefect::LengthMismatch { .. })));

        assert_eq!(SolutionPath::unsolvable("DOG").check(&grid), Err(PathDefect::Empty));
    }

    #[test]
    fn test_unsolvable_words() {
        let puzzle = Puzzle {
            meta: PuzzleMeta::default(),
            words: vec!["CAT".to_string(), "DOG".to_string()],
            grid: cat_grid(),
            solutions: vec![
                SolutionPath::new(
                    "CAT",
                    Some(Direction::Horizontal),
                    vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
                ),
                SolutionPath::unsolvable("DOG"),
            ],
        };
        assert_eq!(puzzle.unsolvable_words(), vec!["DOG"]);
        assert!(puzzle.validate_solutions().is_empty());
    }
}

use std::ops::Range;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    error::{PuzzleError, Result},
    models::{normalize_word, Direction, Grid, Position, Puzzle, PuzzleMeta, SolutionPath},
    utils::letters::{FillStrategy, LetterSource},
};

pub const DEFAULT_GRID_SIZE: usize = 12;
pub const DEFAULT_ATTEMPTS_PER_DIRECTION: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Random anchors tried per direction before moving to the next one.
    pub attempts_per_direction: usize,
    /// Also place words reading right-to-left / bottom-to-top.
    pub allow_backwards: bool,
    pub fill: FillStrategy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            attempts_per_direction: DEFAULT_ATTEMPTS_PER_DIRECTION,
            allow_backwards: false,
            fill: FillStrategy::Uniform,
        }
    }
}

impl GeneratorConfig {
    pub fn with_grid_size(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }
}

type Board = Vec<Vec<Option<char>>>;

/// Range of anchor coordinates along one axis so that `len` cells
/// stepping by `step` stay inside `0..size`.
fn anchor_range(step: isize, len: usize, size: usize) -> Range<usize> {
    match step {
        0 => 0..size,
        s if s > 0 => 0..size + 1 - len,
        _ => len - 1..size,
    }
}

fn walk(anchor: Position, direction: Direction, len: usize) -> Option<Vec<Position>> {
    let (d_row, d_col) = direction.step();
    (0..len).map(|i| anchor.offset(d_row, d_col, i)).collect()
}

/// A placement is accepted when every cell is empty or already holds
/// the letter the word puts there.
fn fits(board: &Board, letters: &[char], positions: &[Position]) -> bool {
    positions.iter().zip(letters).all(|(pos, letter)| {
        match board.get(pos.row).and_then(|row| row.get(pos.col)) {
            Some(None) => true,
            Some(Some(existing)) => existing == letter,
            None => false,
        }
    })
}

pub struct PuzzleGridGenerator {
    config: GeneratorConfig,
}

impl PuzzleGridGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle using the thread-local RNG
    pub fn generate<S: AsRef<str>>(&self, words: &[S]) -> Result<Puzzle> {
        let mut rng = rand::rng();
        self.generate_with_rng(words, &mut rng)
    }

    /// Generate a reproducible puzzle from `seed`
    pub fn generate_with_seed<S: AsRef<str>>(&self, words: &[S], seed: u64) -> Result<Puzzle> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with_rng(words, &mut rng)
    }

    /// Place every word that fits, then fill the rest of the grid with
    /// noise letters. Words that are too long or cannot be placed are
    /// left out of the solutions but generation still succeeds.
    pub fn generate_with_rng<S: AsRef<str>>(&self, words: &[S], rng: &mut impl Rng) -> Result<Puzzle> {
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }
        let size = self.config.grid_size;
        if size == 0 {
            return Err(PuzzleError::InvalidGridSize(size));
        }

        let mut board: Board = vec![vec![None; size]; size];
        let mut normalized = Vec::with_capacity(words.len());
        let mut solutions = Vec::with_capacity(words.len());

        for raw in words {
            let word = normalize_word(raw.as_ref());
            if word.is_empty() {
                tracing::warn!("Skipping {:?}: no letters to place", raw.as_ref());
                continue;
            }
            if normalized.contains(&word) {
                tracing::debug!("Skipping repeated word {}", word);
                continue;
            }
            normalized.push(word.clone());

            let letters: Vec<char> = word.chars().collect();
            if letters.len() > size {
                tracing::warn!(
                    "Word {} ({} letters) does not fit a {}x{} grid",
                    word,
                    letters.len(),
                    size,
                    size
                );
                continue;
            }

            match self.place_word(&board, &letters, rng) {
                Some((direction, positions)) => {
                    for (pos, letter) in positions.iter().zip(&letters) {
                        board[pos.row][pos.col] = Some(*letter);
                    }
                    tracing::debug!("Placed {} {} from {}", word, direction, positions[0]);
                    solutions.push(SolutionPath::new(word, Some(direction), positions));
                }
                None => {
                    tracing::warn!("Could not place {} after exhausting all directions", word);
                }
            }
        }

        if normalized.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }

        let placed: Vec<String> = solutions.iter().map(|s| s.word.clone()).collect();
        let source = LetterSource::new(self.config.fill, &placed);
        let mut cells = Vec::with_capacity(size);
        for row in board {
            let mut filled = Vec::with_capacity(size);
            for cell in row {
                filled.push(match cell {
                    Some(letter) => letter,
                    None => source.pick(rng),
                });
            }
            cells.push(filled);
        }
        let grid = Grid::from_cells(cells)?;

        tracing::info!(
            "Generated {}x{} puzzle with {}/{} words placed",
            size,
            size,
            solutions.len(),
            normalized.len()
        );

        Ok(Puzzle {
            meta: PuzzleMeta {
                word_count: Some(normalized.len()),
                grid_size: Some(size),
                ..PuzzleMeta::default()
            },
            words: normalized,
            grid,
            solutions,
        })
    }

    /// Run generation on the blocking pool so async callers are not stalled
    pub async fn generate_detached(self, words: Vec<String>, seed: Option<u64>) -> Result<Puzzle> {
        tokio::task::spawn_blocking(move || match seed {
            Some(seed) => self.generate_with_seed(&words, seed),
            None => self.generate(&words),
        })
        .await
        .map_err(|e| PuzzleError::TaskFailed(e.to_string()))?
    }

    fn directions(&self, rng: &mut impl Rng) -> Vec<Direction> {
        let mut directions = Direction::FORWARD.to_vec();
        if self.config.allow_backwards {
            directions.extend(Direction::FORWARD.iter().map(|d| d.reversed()));
        }
        directions.shuffle(rng);
        directions
    }

    fn place_word(
        &self,
        board: &Board,
        letters: &[char],
        rng: &mut impl Rng,
    ) -> Option<(Direction, Vec<Position>)> {
        let size = self.config.grid_size;
        let len = letters.len();

        for direction in self.directions(rng) {
            let (d_row, d_col) = direction.step();
            let rows = anchor_range(d_row, len, size);
            let cols = anchor_range(d_col, len, size);

            for _ in 0..self.config.attempts_per_direction {
                let anchor = Position::new(
                    rng.random_range(rows.clone()),
                    rng.random_range(cols.clone()),
                );
                let Some(positions) = walk(anchor, direction, len) else {
                    continue;
                };
                if fits(board, letters, &positions) {
                    return Some((direction, positions));
                }
            }
        }

        None
    }
}

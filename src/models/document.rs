//! Serde-facing puzzle document.
//!
//! Content arrives from external collaborators with either a per-row
//! string grid or a 2-D character array, and with localized or generic
//! field names. Everything is normalized here into [`Puzzle`] so the
//! play logic never sees the variants.

use serde::{Deserialize, Serialize};

use super::puzzle::{normalize_word, Direction, Grid, Position, Puzzle, PuzzleMeta, SolutionPath};
use crate::error::{PuzzleError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDocument {
    #[serde(flatten)]
    pub meta: PuzzleMeta,
    #[serde(alias = "palabras")]
    pub words: Vec<String>,
    #[serde(alias = "cuadricula", alias = "sopa")]
    pub grid: GridDocument,
    #[serde(default, alias = "soluciones", skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<SolutionDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GridDocument {
    Rows(Vec<String>),
    Cells(Vec<Vec<char>>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionDocument {
    #[serde(alias = "palabra")]
    pub word: String,
    #[serde(default, alias = "direccion", skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, alias = "posiciones", alias = "cells")]
    pub positions: Vec<PositionDocument>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionDocument {
    Pair([usize; 2]),
    Object {
        #[serde(alias = "fila", alias = "r")]
        row: usize,
        #[serde(alias = "columna", alias = "c")]
        col: usize,
    },
}

impl From<PositionDocument> for Position {
    fn from(doc: PositionDocument) -> Self {
        match doc {
            PositionDocument::Pair([row, col]) => Position::new(row, col),
            PositionDocument::Object { row, col } => Position::new(row, col),
        }
    }
}

impl From<Position> for PositionDocument {
    fn from(pos: Position) -> Self {
        PositionDocument::Object {
            row: pos.row,
            col: pos.col,
        }
    }
}

fn upper_row(text: &str) -> String {
    text.trim().chars().flat_map(char::to_uppercase).collect()
}

impl GridDocument {
    fn into_grid(self) -> Result<Grid> {
        let cells = match self {
            GridDocument::Rows(rows) => rows
                .iter()
                .map(|row| upper_row(row).chars().collect())
                .collect(),
            GridDocument::Cells(cells) => cells
                .into_iter()
                .map(|row| row.into_iter().flat_map(char::to_uppercase).collect())
                .collect(),
        };
        Grid::from_cells(cells)
    }
}

impl PuzzleDocument {
    pub fn into_puzzle(self) -> Result<Puzzle> {
        let mut words: Vec<String> = Vec::with_capacity(self.words.len());
        for word in self.words.iter().map(|word| normalize_word(word)) {
            if !word.is_empty() && !words.contains(&word) {
                words.push(word);
            }
        }
        if words.is_empty() {
            return Err(PuzzleError::invalid("word list is empty"));
        }

        let grid = self.grid.into_grid()?;

        if self.solutions.len() > words.len() {
            return Err(PuzzleError::invalid(format!(
                "{} solutions supplied for {} words",
                self.solutions.len(),
                words.len()
            )));
        }

        let mut solutions: Vec<SolutionPath> = Vec::with_capacity(self.solutions.len());
        for doc in self.solutions {
            let word = normalize_word(&doc.word);
            if !words.contains(&word) {
                return Err(PuzzleError::invalid(format!(
                    "solution for {:?} does not match any listed word",
                    doc.word
                )));
            }
            if solutions.iter().any(|path| path.word == word) {
                return Err(PuzzleError::invalid(format!(
                    "more than one solution for {}",
                    word
                )));
            }

            let path = SolutionPath::new(
                word,
                doc.direction.as_deref().and_then(Direction::from_label),
                doc.positions.into_iter().map(Position::from).collect(),
            );
            // An empty path is a placeholder for a word the source could not place.
            if path.is_usable() {
                if let Err(defect) = path.check(&grid) {
                    return Err(PuzzleError::invalid(format!(
                        "solution for {} is malformed: {}",
                        path.word, defect
                    )));
                }
            }
            solutions.push(path);
        }

        Ok(Puzzle {
            meta: self.meta,
            words,
            grid,
            solutions,
        })
    }
}

impl From<&Puzzle> for PuzzleDocument {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            meta: puzzle.meta.clone(),
            words: puzzle.words.clone(),
            grid: GridDocument::Rows(puzzle.grid.to_row_strings()),
            solutions: puzzle
                .solutions
                .iter()
                .map(|path| SolutionDocument {
                    word: path.word.clone(),
                    direction: path.direction.map(|d| d.label().to_string()),
                    positions: path.positions.iter().copied().map(PositionDocument::from).collect(),
                })
                .collect(),
        }
    }
}

impl Puzzle {
    /// Parse and normalize an externally supplied puzzle document.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: PuzzleDocument =
            serde_json::from_str(json).map_err(|e| PuzzleError::invalid(e.to_string()))?;
        document.into_puzzle()
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let document: PuzzleDocument =
            serde_json::from_value(value).map_err(|e| PuzzleError::invalid(e.to_string()))?;
        document.into_puzzle()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&PuzzleDocument::from(self))?)
    }
}

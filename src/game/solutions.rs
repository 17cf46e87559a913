use crate::models::{Direction, Grid, Position, Puzzle, SolutionPath};

/// Word to cell-path mapping consulted during play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionIndex {
    paths: Vec<SolutionPath>,
}

impl SolutionIndex {
    pub fn new(paths: Vec<SolutionPath>) -> Self {
        Self { paths }
    }

    /// Index a puzzle. Supplied solutions are kept as they are; any word
    /// without one goes through the horizontal fallback deriver.
    pub fn build(puzzle: &Puzzle) -> Self {
        let mut paths = puzzle.solutions.clone();

        for word in &puzzle.words {
            if paths.iter().any(|path| &path.word == word) {
                continue;
            }
            let derived = derive_horizontal(&puzzle.grid, word);
            if derived.is_usable() {
                tracing::debug!("Derived horizontal path for {} at {}", word, derived.positions[0]);
            } else {
                tracing::warn!("Word {} not found in any grid row; it cannot be solved", word);
            }
            paths.push(derived);
        }

        Self { paths }
    }

    pub fn paths(&self) -> &[SolutionPath] {
        &self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &SolutionPath> {
        self.paths.iter()
    }

    pub fn path_for(&self, word: &str) -> Option<&SolutionPath> {
        self.paths.iter().find(|path| path.word == word)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Find `word` as a left-to-right run in the first grid row containing it.
///
/// Only horizontal occurrences are found. A word that appears in no row
/// yields an unsolvable placeholder with no positions.
pub fn derive_horizontal(grid: &Grid, word: &str) -> SolutionPath {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return SolutionPath::unsolvable(word);
    }

    for (row, cells) in grid.iter_rows().enumerate() {
        if let Some(col) = cells.windows(letters.len()).position(|run| run == letters.as_slice()) {
            let positions = (0..letters.len())
                .map(|i| Position::new(row, col + i))
                .collect();
            return SolutionPath::new(word, Some(Direction::Horizontal), positions);
        }
    }

    SolutionPath::unsolvable(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PuzzleMeta;

    fn puzzle(rows: &[&str], words: &[&str], solutions: Vec<SolutionPath>) -> Puzzle {
        Puzzle {
            meta: PuzzleMeta::default(),
            words: words.iter().map(|w| w.to_string()).collect(),
            grid: Grid::from_rows(rows).unwrap(),
            solutions,
        }
    }

    #[test]
    fn test_derive_from_later_row() {
        let grid = Grid::from_rows(&["DOG", "CAT", "BUS"]).unwrap();
        let path = derive_horizontal(&grid, "CAT");
        assert_eq!(
            path.positions,
            vec![Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
        );
        assert_eq!(path.direction, Some(Direction::Horizontal));
    }

    #[test]
    fn test_derive_mid_row_and_first_row_wins() {
        let grid = Grid::from_rows(&["XXCATX", "CATXXX"]).unwrap();
        let path = derive_horizontal(&grid, "CAT");
        assert_eq!(path.positions[0], Position::new(0, 2));
        assert_eq!(path.check(&grid), Ok(()));
    }

    #[test]
    fn test_vertical_words_are_not_derived() {
        let grid = Grid::from_rows(&["CXX", "AXX", "TXX"]).unwrap();
        let path = derive_horizontal(&grid, "CAT");
        assert!(!path.is_usable());
        assert_eq!(path.word, "CAT");
    }

    #[test]
    fn test_word_longer_than_row() {
        let grid = Grid::from_rows(&["CA", "TX"]).unwrap();
        assert!(!derive_horizontal(&grid, "CAT").is_usable());
    }

    #[test]
    fn test_build_keeps_supplied_and_fills_missing() {
        let supplied = SolutionPath::new(
            "DOG",
            Some(Direction::Horizontal),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
        );
        let index = SolutionIndex::build(&puzzle(
            &["DOG", "CAT", "BUS"],
            &["DOG", "CAT", "ZZZ"],
            vec![supplied.clone()],
        ));

        assert_eq!(index.len(), 3);
        assert_eq!(index.path_for("DOG"), Some(&supplied));
        assert_eq!(index.path_for("CAT").unwrap().positions[0], Position::new(1, 0));
        assert!(!index.path_for("ZZZ").unwrap().is_usable());
    }

    #[test]
    fn test_build_without_any_solutions() {
        let index = SolutionIndex::build(&puzzle(&["DOG", "CAT", "BUS"], &["CAT"], Vec::new()));
        assert_eq!(
            index.paths()[0].positions,
            vec![Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
        );
    }
}

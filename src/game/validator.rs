use std::collections::BTreeSet;

use crate::{
    game::solutions::SolutionIndex,
    models::{Position, SolutionPath},
};

/// Selections shorter than this never match.
pub const MIN_SELECTION_LEN: usize = 2;

/// Words credited so far and every cell belonging to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    words: Vec<String>,
    highlighted: BTreeSet<Position>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Words in the order they were found.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn highlighted(&self) -> &BTreeSet<Position> {
        &self.highlighted
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Record `path` as found. Returns false if its word already was.
    pub fn credit(&mut self, path: &SolutionPath) -> bool {
        if self.contains(&path.word) {
            return false;
        }
        self.words.push(path.word.clone());
        self.highlighted.extend(path.positions.iter().copied());
        true
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.highlighted.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No gesture was in progress.
    Idle,
    /// Fewer than two cells were selected.
    TooShort,
    NoMatch(Vec<Position>),
    Matched(SolutionPath),
}

pub struct MatchValidator;

impl MatchValidator {
    /// First unfound solution whose path equals `selection` forwards or
    /// backwards, in index order.
    pub fn find_match<'a>(
        selection: &[Position],
        index: &'a SolutionIndex,
        found: &FoundWords,
    ) -> Option<&'a SolutionPath> {
        if selection.len() < MIN_SELECTION_LEN {
            return None;
        }
        let reversed: Vec<Position> = selection.iter().rev().copied().collect();

        index
            .iter()
            .filter(|path| !found.contains(&path.word))
            .find(|path| path.positions == selection || path.positions == reversed)
    }

    /// Check a finished selection and credit the matching word.
    pub fn validate(selection: Vec<Position>, index: &SolutionIndex, found: &mut FoundWords) -> MatchOutcome {
        if selection.len() < MIN_SELECTION_LEN {
            return MatchOutcome::TooShort;
        }

        match Self::find_match(&selection, index, found) {
            Some(path) => {
                found.credit(path);
                MatchOutcome::Matched(path.clone())
            }
            None => MatchOutcome::NoMatch(selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn cat_index() -> SolutionIndex {
        SolutionIndex::new(vec![SolutionPath::new(
            "CAT",
            Some(Direction::Horizontal),
            vec![p(0, 0), p(0, 1), p(0, 2)],
        )])
    }

    #[test]
    fn test_forward_and_reverse_match() {
        let index = cat_index();

        let mut found = FoundWords::new();
        let outcome = MatchValidator::validate(vec![p(0, 0), p(0, 1), p(0, 2)], &index, &mut found);
        assert!(matches!(outcome, MatchOutcome::Matched(ref path) if path.word == "CAT"));
        assert_eq!(found.words(), &["CAT".to_string()]);

        let mut found = FoundWords::new();
        let outcome = MatchValidator::validate(vec![p(0, 2), p(0, 1), p(0, 0)], &index, &mut found);
        assert!(matches!(outcome, MatchOutcome::Matched(_)));
        assert!(found.contains("CAT"));
    }

    #[test]
    fn test_order_matters_not_set_equality() {
        let index = cat_index();
        let mut found = FoundWords::new();
        let outcome = MatchValidator::validate(vec![p(0, 1), p(0, 0), p(0, 2)], &index, &mut found);
        assert!(matches!(outcome, MatchOutcome::NoMatch(_)));
        assert!(found.is_empty());
    }

    #[test]
    fn test_partial_path_does_not_match() {
        let index = cat_index();
        let mut found = FoundWords::new();
        let outcome = MatchValidator::validate(vec![p(0, 0), p(0, 1)], &index, &mut found);
        assert_eq!(outcome, MatchOutcome::NoMatch(vec![p(0, 0), p(0, 1)]));
    }

    #[test]
    fn test_short_selection_is_noop() {
        let index = cat_index();
        let mut found = FoundWords::new();
        assert_eq!(MatchValidator::validate(vec![p(0, 0)], &index, &mut found), MatchOutcome::TooShort);
        assert_eq!(MatchValidator::validate(Vec::new(), &index, &mut found), MatchOutcome::TooShort);
    }

    #[test]
    fn test_matching_twice_is_idempotent() {
        let index = cat_index();
        let mut found = FoundWords::new();
        let selection = vec![p(0, 0), p(0, 1), p(0, 2)];

        MatchValidator::validate(selection.clone(), &index, &mut found);
        let after_first = found.clone();

        let outcome = MatchValidator::validate(selection, &index, &mut found);
        assert!(matches!(outcome, MatchOutcome::NoMatch(_)));
        assert_eq!(found, after_first);
        assert_eq!(found.highlighted().len(), 3);
    }

    #[test]
    fn test_shared_path_credits_first_unfound() {
        let path = vec![p(1, 0), p(1, 1)];
        let index = SolutionIndex::new(vec![
            SolutionPath::new("AB", None, path.clone()),
            SolutionPath::new("BA", None, path.iter().rev().copied().collect()),
        ]);
        let mut found = FoundWords::new();

        let first = MatchValidator::validate(path.clone(), &index, &mut found);
        assert!(matches!(first, MatchOutcome::Matched(ref m) if m.word == "AB"));

        let second = MatchValidator::validate(path, &index, &mut found);
        assert!(matches!(second, MatchOutcome::Matched(ref m) if m.word == "BA"));
        assert_eq!(found.len(), 2);
        assert_eq!(found.highlighted().len(), 2);
    }

    #[test]
    fn test_unsolvable_placeholder_never_matches() {
        let index = SolutionIndex::new(vec![SolutionPath::unsolvable("DOG")]);
        let mut found = FoundWords::new();
        let outcome = MatchValidator::validate(vec![p(0, 0), p(0, 1), p(0, 2)], &index, &mut found);
        assert!(matches!(outcome, MatchOutcome::NoMatch(_)));
    }
}

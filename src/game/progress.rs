use serde::{Deserialize, Serialize};

use crate::game::validator::FoundWords;

/// Completion of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub found: usize,
    pub total: usize,
    pub percent: f64,
    pub complete: bool,
}

pub struct ProgressTracker;

impl ProgressTracker {
    /// Derive progress from the found-word count.
    ///
    /// A puzzle with no words reports 0% and is never complete.
    pub fn compute(found: usize, total: usize) -> Progress {
        if total == 0 {
            return Progress {
                found: 0,
                total: 0,
                percent: 0.0,
                complete: false,
            };
        }

        let found = found.min(total);
        Progress {
            found,
            total,
            percent: 100.0 * found as f64 / total as f64,
            complete: found == total,
        }
    }

    /// Progress over `words`. Only found words that are on the list count.
    pub fn for_words(found: &FoundWords, words: &[String]) -> Progress {
        let found = found
            .words()
            .iter()
            .filter(|word| words.contains(word))
            .count();
        Self::compute(found, words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, SolutionPath};

    #[test]
    fn test_no_words_found() {
        let progress = ProgressTracker::compute(0, 5);
        assert_eq!(progress.percent, 0.0);
        assert!(!progress.complete);
    }

    #[test]
    fn test_all_words_found() {
        for total in 1..=20 {
            let progress = ProgressTracker::compute(total, total);
            assert_eq!(progress.percent, 100.0);
            assert!(progress.complete);
        }
    }

    #[test]
    fn test_partial_progress() {
        let progress = ProgressTracker::compute(1, 4);
        assert_eq!(progress.percent, 25.0);
        assert!(!progress.complete);
    }

    #[test]
    fn test_empty_puzzle() {
        let progress = ProgressTracker::compute(0, 0);
        assert_eq!(progress.percent, 0.0);
        assert!(!progress.complete);
    }

    #[test]
    fn test_complete_iff_hundred_percent() {
        for total in 1..=6 {
            for found in 0..=total {
                let progress = ProgressTracker::compute(found, total);
                assert_eq!(progress.complete, progress.percent == 100.0);
            }
        }
    }

    #[test]
    fn test_unlisted_found_word_does_not_count() {
        let words = vec!["CAT".to_string(), "DOG".to_string()];
        let mut found = FoundWords::new();
        found.credit(&SolutionPath::new("CAT", None, vec![Position::new(0, 0), Position::new(0, 1)]));
        found.credit(&SolutionPath::new("ZZZ", None, vec![Position::new(2, 0), Position::new(2, 1)]));

        let progress = ProgressTracker::for_words(&found, &words);
        assert_eq!(progress.found, 1);
        assert_eq!(progress.percent, 50.0);
        assert!(!progress.complete);
    }
}

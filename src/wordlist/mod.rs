use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

use crate::error::Result;

/// Source words for puzzle generation, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).await?;
        let list = Self::parse(&content);

        tracing::info!(
            "Loaded {} words from {}",
            list.len(),
            path.as_ref().display()
        );

        Ok(list)
    }

    /// One word per line. Blank lines and `#` comments are skipped, and
    /// repeats (ignoring case) keep their first occurrence.
    pub fn parse(content: &str) -> Self {
        let mut seen = HashSet::new();
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter(|word| seen.insert(word.to_uppercase()))
            .map(String::from)
            .collect();

        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Get the number of words in the list
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PuzzleError;

    #[test]
    fn test_parse_skips_comments_and_duplicates() {
        let list = WordList::parse("# animals\ncat\n\n  Dog  \nCAT\nowl\n");
        assert_eq!(list.words(), &["cat", "Dog", "owl"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_empty_list() {
        assert!(WordList::parse("\n# nothing\n").is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("wordlist-{}.txt", std::process::id()));
        std::fs::write(&path, "tiger\nlion\n").unwrap();

        let list = tokio_test::block_on(WordList::load(&path)).unwrap();
        assert_eq!(list.into_words(), vec!["tiger", "lion"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let result = tokio_test::block_on(WordList::load("/nonexistent/words.txt"));
        assert!(matches!(result, Err(PuzzleError::Io(_))));
    }
}

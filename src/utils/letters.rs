use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Letters used for uniform noise fill.
pub static ALPHABET: Lazy<Vec<char>> = Lazy::new(|| ('A'..='Z').collect());

/// Letter frequency distribution for English (approximate)
/// Used for weighted noise fill
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('E', 12.70),
        ('T', 9.05),
        ('A', 8.16),
        ('O', 7.50),
        ('I', 6.96),
        ('N', 6.74),
        ('S', 6.32),
        ('H', 6.09),
        ('R', 5.98),
        ('D', 4.25),
        ('L', 4.02),
        ('C', 2.78),
        ('U', 2.75),
        ('M', 2.40),
        ('W', 2.36),
        ('F', 2.22),
        ('G', 2.01),
        ('Y', 1.97),
        ('P', 1.92),
        ('B', 1.49),
        ('V', 0.97),
        ('K', 0.77),
        ('J', 0.15),
        ('X', 0.15),
        ('Q', 0.09),
        ('Z', 0.07),
    ]
});

static CUMULATIVE_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(get_cumulative_distribution);

/// Calculate the cumulative distribution for weighted random selection
pub fn get_cumulative_distribution() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, freq)| {
            cumulative += freq;
            (*ch, cumulative)
        })
        .collect()
}

fn weighted_letter(rng: &mut impl Rng) -> char {
    let total = CUMULATIVE_DISTRIBUTION.last().map_or(0.0, |(_, c)| *c);
    let random_value = rng.random::<f32>() * total;

    for (letter, cumulative) in CUMULATIVE_DISTRIBUTION.iter() {
        if random_value <= *cumulative {
            return *letter;
        }
    }

    'E' // Fallback
}

fn uniform_letter(rng: &mut impl Rng) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())]
}

/// How empty cells are filled once all words are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillStrategy {
    /// Uniformly random A-Z.
    #[default]
    Uniform,
    /// English letter frequencies.
    Weighted,
    /// Only letters that occur in the placed words.
    WordLetters,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fill strategy `{0}` (expected uniform, weighted or word-letters)")]
pub struct UnknownFillStrategy(pub String);

impl FromStr for FillStrategy {
    type Err = UnknownFillStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(FillStrategy::Uniform),
            "weighted" => Ok(FillStrategy::Weighted),
            "word-letters" | "word_letters" => Ok(FillStrategy::WordLetters),
            other => Err(UnknownFillStrategy(other.to_string())),
        }
    }
}

/// Source of noise letters for one generated grid.
#[derive(Debug, Clone)]
pub enum LetterSource {
    Uniform,
    Weighted,
    Pool(Vec<char>),
}

impl LetterSource {
    pub fn new(strategy: FillStrategy, placed_words: &[String]) -> Self {
        match strategy {
            FillStrategy::Uniform => LetterSource::Uniform,
            FillStrategy::Weighted => LetterSource::Weighted,
            FillStrategy::WordLetters => {
                let mut pool: Vec<char> = placed_words.iter().flat_map(|w| w.chars()).collect();
                pool.sort_unstable();
                pool.dedup();
                if pool.is_empty() {
                    LetterSource::Uniform
                } else {
                    LetterSource::Pool(pool)
                }
            }
        }
    }

    pub fn pick(&self, rng: &mut impl Rng) -> char {
        match self {
            LetterSource::Uniform => uniform_letter(rng),
            LetterSource::Weighted => weighted_letter(rng),
            LetterSource::Pool(pool) => pool[rng.random_range(0..pool.len())],
        }
    }
}

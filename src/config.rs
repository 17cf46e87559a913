use anyhow::{Context, Result};
use std::env;

use crate::{
    game::generator::{GeneratorConfig, DEFAULT_ATTEMPTS_PER_DIRECTION, DEFAULT_GRID_SIZE},
    utils::letters::FillStrategy,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
    pub generator: GeneratorSettings,
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub words_path: String,
    /// Pre-built puzzle document; takes precedence over generation.
    pub puzzle_path: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub grid_size: usize,
    pub attempts_per_direction: usize,
    pub allow_backwards: bool,
    pub fill: FillStrategy,
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = SourceConfig {
            words_path: lookup("WORDS_PATH")
                .unwrap_or_else(|| "./words.txt".to_string()),
            puzzle_path: lookup("PUZZLE_PATH").filter(|p| !p.trim().is_empty()),
            title: lookup("PUZZLE_TITLE").filter(|t| !t.trim().is_empty()),
        };

        let generator = GeneratorSettings {
            grid_size: lookup("GRID_SIZE")
                .unwrap_or_else(|| DEFAULT_GRID_SIZE.to_string())
                .parse()
                .context("GRID_SIZE must be a number")?,
            attempts_per_direction: lookup("ATTEMPTS_PER_DIRECTION")
                .unwrap_or_else(|| DEFAULT_ATTEMPTS_PER_DIRECTION.to_string())
                .parse()
                .context("ATTEMPTS_PER_DIRECTION must be a number")?,
            allow_backwards: lookup("ALLOW_BACKWARDS")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .context("ALLOW_BACKWARDS must be true or false")?,
            fill: lookup("FILL_STRATEGY")
                .unwrap_or_else(|| "uniform".to_string())
                .parse::<FillStrategy>()
                .context("FILL_STRATEGY is not recognised")?,
            seed: lookup("PUZZLE_SEED")
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("PUZZLE_SEED must be an unsigned number")?,
        };

        if generator.grid_size == 0 {
            anyhow::bail!("GRID_SIZE must be greater than zero");
        }

        Ok(Config { source, generator })
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            grid_size: self.generator.grid_size,
            attempts_per_direction: self.generator.attempts_per_direction,
            allow_backwards: self.generator.allow_backwards,
            fill: self.generator.fill,
        }
    }
}

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_search_engine::{
    config::Config, PlayerEvent, Puzzle, PuzzleGridGenerator, PuzzleSession, SessionUpdate,
    WordList,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for session updates
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search_engine=debug,word_search=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting word search session...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let puzzle = load_puzzle(&config).await?;
    for word in puzzle.unsolvable_words() {
        tracing::warn!("Word {} cannot be found in this puzzle", word);
    }

    let mut stdout = tokio::io::stdout();
    emit(&mut stdout, &SessionUpdate::puzzle_loaded(&puzzle)).await?;

    let mut session = PuzzleSession::new(puzzle);
    emit(&mut stdout, &SessionUpdate::progress(&session.progress())).await?;

    // One JSON event per line until stdin closes
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<PlayerEvent>(line) {
            Ok(event) => {
                for update in session.handle(event) {
                    emit(&mut stdout, &update).await?;
                }
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed event: {}", e);
                emit(&mut stdout, &SessionUpdate::error(format!("invalid event: {}", e))).await?;
            }
        }
    }

    let snapshot = session.snapshot();
    tracing::info!(
        "Input closed with {}/{} words found",
        snapshot.progress.found,
        snapshot.progress.total
    );

    Ok(())
}

async fn load_puzzle(config: &Config) -> Result<Puzzle> {
    if let Some(path) = &config.source.puzzle_path {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read puzzle {}", path))?;
        let puzzle = Puzzle::from_json(&json).with_context(|| format!("Puzzle {} is invalid", path))?;
        tracing::info!("Loaded puzzle from {}", path);
        return Ok(puzzle);
    }

    let words = WordList::load(&config.source.words_path)
        .await
        .with_context(|| format!("Failed to load word list {}", config.source.words_path))?;

    let generator = PuzzleGridGenerator::new(config.generator_config());
    let mut puzzle = generator
        .generate_detached(words.into_words(), config.generator.seed)
        .await?;
    puzzle.meta.title = config.source.title.clone();

    Ok(puzzle)
}

async fn emit(stdout: &mut Stdout, update: &SessionUpdate) -> Result<()> {
    let mut line = serde_json::to_vec(update)?;
    line.push(b'\n');
    stdout.write_all(&line).await?;
    stdout.flush().await?;
    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use creature_battle::ui::{ConsoleSink, DisplaySink, JsonSink, StdinInput};
use creature_battle::{Game, GameConfig};

#[derive(Parser)]
#[command(version, about = "Turn-based creature battles against the machine")]
struct Cli {
    /// RON roster file to load instead of the built-in roster.
    #[arg(long)]
    roster: Option<PathBuf>,
    /// Seed for reproducible battles.
    #[arg(long)]
    seed: Option<u64>,
    /// How screens are written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    output: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Console,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig {
        roster_path: cli.roster,
        seed: cli.seed,
    };

    let data = config.load_game_data().with_context(|| match &config.roster_path {
        Some(path) => format!("Failed to load roster from {}", path.display()),
        None => "Failed to load the built-in roster".to_string(),
    })?;

    let sink: Box<dyn DisplaySink> = match cli.output {
        OutputFormat::Console => Box::new(ConsoleSink::stdout()),
        OutputFormat::Json => Box::new(JsonSink::stdout()),
    };

    let mut game = Game::new(data, Box::new(config.random_source()), sink, StdinInput::new());
    game.run().context("Game session ended with an error")
}

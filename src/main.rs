//! Pixel Guess runner (default binary).
//!
//! `play` (the default) runs the interactive terminal game; `pixelize` and
//! `suggest` expose the pixelization engine and the suggestion ranker on
//! their own.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pixel_guess::types::{CatalogKind, Difficulty};
use pixel_guess::Config;

mod cli;

#[derive(Parser)]
#[command(name = "pixel-guess")]
#[command(about = "Guess the character or item behind a pixelated picture")]
#[command(version)]
struct Cli {
    /// Asset root with the catalog JSON files and image folders
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Preferences file
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play {
        /// characters | items
        #[arg(long, default_value = "characters", value_parser = parse_kind)]
        mode: CatalogKind,

        /// easy | medium | hard | extreme (character mode only)
        #[arg(long, default_value = "easy", value_parser = parse_difficulty)]
        difficulty: Difficulty,

        /// Include skins / arena items (saved as the new preference)
        #[arg(long)]
        extended: Option<bool>,
    },

    /// Pixelize one image file
    Pixelize {
        image: PathBuf,

        #[arg(long, default_value = "easy", value_parser = parse_difficulty, conflicts_with = "block")]
        difficulty: Difficulty,

        /// Explicit block size in pixels
        #[arg(long)]
        block: Option<u32>,

        /// Write a PNG here instead of printing a data URI
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print ranked autocomplete suggestions for a query
    Suggest {
        query: String,

        #[arg(long, default_value = "characters", value_parser = parse_kind)]
        mode: CatalogKind,
    },
}

fn parse_difficulty(s: &str) -> std::result::Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
}

fn parse_kind(s: &str) -> std::result::Result<CatalogKind, String> {
    CatalogKind::from_str(s).ok_or_else(|| format!("unknown mode '{s}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.assets, cli.prefs, cli.log_file);
    let interactive = !matches!(
        cli.command,
        Some(Commands::Pixelize { .. }) | Some(Commands::Suggest { .. })
    );
    init_logging(&config, cli.verbose, interactive)?;

    match cli.command {
        Some(Commands::Play {
            mode,
            difficulty,
            extended,
        }) => cli::play::play_command(&config, mode, difficulty, extended),
        Some(Commands::Pixelize {
            image,
            difficulty,
            block,
            out,
        }) => cli::pixelize::pixelize_command(&image, block.unwrap_or(difficulty.block_size()), out),
        Some(Commands::Suggest { query, mode }) => cli::suggest::suggest_command(&config, &query, mode),
        None => cli::play::play_command(&config, CatalogKind::Characters, Difficulty::default(), None),
    }
}

/// The game owns the terminal, so interactive play only logs to a file.
fn init_logging(config: &Config, verbose: bool, interactive: bool) -> Result<()> {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if !interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

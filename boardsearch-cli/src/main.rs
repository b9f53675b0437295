//! boardsearch CLI - Command-line interface
//!
//! Commands:
//! - checkers: Self-play a checkers game from a board file
//! - hrd: Solve a Hua Rong Dao puzzle from a board file

mod checkers_cmd;
mod hrd_cmd;

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use boardsearch_core::EngineConfig;

#[derive(Parser)]
#[command(name = "boardsearch")]
#[command(about = "Checkers alpha-beta player and sliding-block puzzle solver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a checkers game against itself, starting from a board file
    Checkers(checkers_cmd::CheckersArgs),
    /// Solve a Hua Rong Dao puzzle
    Hrd(hrd_cmd::HrdArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Checkers(args) => checkers_cmd::run(args),
        Commands::Hrd(args) => hrd_cmd::run(args),
    }
}

/// Engine settings from `--config`, or the defaults
pub(crate) fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path),
        None => Ok(EngineConfig::default()),
    }
}

/// Path arguments shared by both commands
pub(crate) fn describe(input: &Path, output: &Path) -> String {
    format!("{} -> {}", input.display(), output.display())
}

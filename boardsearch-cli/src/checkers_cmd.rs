//! Checkers command - self-play from a board file
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_board(), write_game(), report()

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use boardsearch_core::checkers::{Board, SearchStats};
use boardsearch_core::text::render_sequence;
use boardsearch_core::{AlphaBetaAI, GameRecord, Side};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct CheckersArgs {
    /// Initial board, 8 lines of r/R/b/B/.
    #[arg(long, value_name = "FILE")]
    pub inputfile: PathBuf,

    /// Where to write every board of the game
    #[arg(long, value_name = "FILE")]
    pub outputfile: PathBuf,

    /// Engine configuration JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Search depth in plies, at least 1 (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub depth: Option<u32>,

    /// Stop after this many plies (0 = no limit, overrides config)
    #[arg(long)]
    pub max_plies: Option<u32>,

    /// Print a JSON summary to stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct GameSummary {
    plies: u32,
    winner: Option<Side>,
    boards: usize,
    stats: SearchStats,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run checkers command
pub fn run(args: CheckersArgs) -> Result<()> {
    let mut config = crate::load_config(args.config.as_deref())?.checkers;
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
    }
    if let Some(max_plies) = args.max_plies {
        config = config.with_max_plies((max_plies > 0).then_some(max_plies));
    }

    let initial = load_board(&args.inputfile)?;

    tracing::info!(
        "Playing checkers: {} (depth={}, first={:?})",
        crate::describe(&args.inputfile, &args.outputfile),
        config.depth_limit,
        config.first_side
    );

    let ai = AlphaBetaAI::from_config(&config);
    let record = ai.play_game(initial, config.first_side, config.max_plies);

    write_game(&record, &args.outputfile)?;
    report(&record, args.json)?;

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_board(path: &Path) -> Result<Board> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board: {}", path.display()))?;
    Board::parse(&text).with_context(|| format!("Invalid checkers board: {}", path.display()))
}

fn write_game(record: &GameRecord, path: &Path) -> Result<()> {
    std::fs::write(path, render_sequence(&record.boards))
        .with_context(|| format!("Failed to write game: {}", path.display()))
}

fn report(record: &GameRecord, json: bool) -> Result<()> {
    match record.winner {
        Some(side) => tracing::info!("Game over after {} plies, {:?} wins", record.plies, side),
        None => tracing::info!("Game stopped after {} plies", record.plies),
    }
    tracing::info!(
        "Searched {} positions ({} cache hits, {} cutoffs)",
        record.stats.nodes,
        record.stats.cache_hits,
        record.stats.cutoffs
    );

    if json {
        let summary = GameSummary {
            plies: record.plies,
            winner: record.winner,
            boards: record.boards.len(),
            stats: record.stats,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

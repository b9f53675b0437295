//! Hua Rong Dao command - solve a puzzle from a board file
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_board(), write_solution(), report()

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use boardsearch_core::puzzle::{self, Board, SearchStats};
use boardsearch_core::text::render_sequence;
use boardsearch_core::{Algorithm, SearchReport};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AlgoArg {
    Dfs,
    Astar,
}

impl From<AlgoArg> for Algorithm {
    fn from(arg: AlgoArg) -> Self {
        match arg {
            AlgoArg::Dfs => Algorithm::Dfs,
            AlgoArg::Astar => Algorithm::AStar,
        }
    }
}

#[derive(Args)]
pub struct HrdArgs {
    /// Initial board, 5 lines of 4 glyphs (1 2 < > ^ v .)
    #[arg(long, value_name = "FILE")]
    pub inputfile: PathBuf,

    /// Where to write the solution path
    #[arg(long, value_name = "FILE")]
    pub outputfile: PathBuf,

    /// Search algorithm
    #[arg(long, value_enum)]
    pub algo: AlgoArg,

    /// Engine configuration JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a JSON summary to stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SolveSummary {
    algorithm: Algorithm,
    solved: bool,
    moves: Option<usize>,
    capped: bool,
    stats: SearchStats,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run hrd command
pub fn run(args: HrdArgs) -> Result<()> {
    let config = crate::load_config(args.config.as_deref())?.puzzle;
    let algorithm = Algorithm::from(args.algo);
    let initial = load_board(&args.inputfile)?;

    tracing::info!(
        "Solving puzzle with {}: {}",
        algorithm,
        crate::describe(&args.inputfile, &args.outputfile)
    );

    let report = puzzle::solve(initial, algorithm, &config);

    write_solution(&report, &args.outputfile)?;
    print_report(&report, args.json)?;

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_board(path: &Path) -> Result<Board> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board: {}", path.display()))?;
    Board::parse(&text).with_context(|| format!("Invalid puzzle board: {}", path.display()))
}

/// Solution boards, or a single blank line when unsolved
fn render_solution(report: &SearchReport) -> String {
    match &report.solution {
        Some(path) => render_sequence(path),
        None => "\n".to_string(),
    }
}

fn write_solution(report: &SearchReport, path: &Path) -> Result<()> {
    std::fs::write(path, render_solution(report))
        .with_context(|| format!("Failed to write solution: {}", path.display()))
}

fn print_report(report: &SearchReport, json: bool) -> Result<()> {
    match report.moves() {
        Some(moves) => tracing::info!("Solved in {} moves", moves),
        None => tracing::info!("No solution found"),
    }
    tracing::info!(
        "Expanded {} states ({} generated, {} pruned)",
        report.stats.expanded,
        report.stats.generated,
        report.stats.pruned
    );

    if json {
        let summary = SolveSummary {
            algorithm: report.algorithm,
            solved: report.is_solved(),
            moves: report.moves(),
            capped: report.capped,
            stats: report.stats,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

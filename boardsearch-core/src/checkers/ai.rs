//! CPU-based alpha-beta checkers AI

use super::board::{Board, Side};
use super::eval::{evaluate, score_with_depth, terminal_utility, Score, Utility};
use super::movegen::successors;
use super::transposition::{Bound, TTEntry, TTable};
use crate::config::CheckersConfig;
use serde::Serialize;
use std::ops::AddAssign;

/// Bound wider than any reachable score
const INFINITY: Score = 1_000_000;

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Outcome of one search from a root position
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Chosen successor and its backed-up value for the side to move
    Move { board: Board, value: Score },
    /// The side to move has no legal move
    NoMove,
}

impl Decision {
    pub fn board(&self) -> Option<&Board> {
        match self {
            Decision::Move { board, .. } => Some(board),
            Decision::NoMove => None,
        }
    }

    pub fn value(&self) -> Option<Score> {
        match self {
            Decision::Move { value, .. } => Some(*value),
            Decision::NoMove => None,
        }
    }
}

/// Search counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    pub cache_hits: u64,
    pub cutoffs: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.cache_hits += other.cache_hits;
        self.cutoffs += other.cutoffs;
    }
}

/// A self-played game
#[derive(Clone, Debug)]
pub struct GameRecord {
    /// Every position reached, starting with the initial board
    pub boards: Vec<Board>,
    pub plies: u32,
    /// None when the ply cap ended the game
    pub winner: Option<Side>,
    pub stats: SearchStats,
}

// ============================================================================
// ALPHA-BETA AI
// ============================================================================

/// Alpha-Beta AI player
#[derive(Clone, Debug)]
pub struct AlphaBetaAI {
    /// Plies searched below the root
    pub depth: u32,
}

impl AlphaBetaAI {
    /// The root's successors are always scored, so a depth of 0 searches
    /// one ply, the same as a depth of 1.
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }

    pub fn from_config(config: &CheckersConfig) -> Self {
        Self::new(config.depth_limit)
    }

    /// Get best successor for `side` to move
    pub fn best_move(&self, board: &Board, side: Side) -> Decision {
        self.search(board, side).0
    }

    /// Search `board` with `side` to move.
    ///
    /// Returns the first successor (in generation order) whose value equals
    /// the best value. Each call owns a fresh transposition cache.
    pub fn search(&self, board: &Board, side: Side) -> (Decision, SearchStats) {
        let moves = successors(board, side);
        if moves.is_empty() {
            return (Decision::NoMove, SearchStats::default());
        }

        let mut searcher = Searcher::default();
        let remaining = self.depth.saturating_sub(1);
        let mut alpha = -INFINITY;
        let mut best: Option<(usize, Score)> = None;

        for (index, child) in moves.iter().enumerate() {
            let score = -searcher.negamax(child, side.opponent(), remaining, -INFINITY, -alpha);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
            alpha = alpha.max(score);
        }

        let stats = searcher.stats;
        tracing::debug!(
            ?side,
            nodes = stats.nodes,
            cache_hits = stats.cache_hits,
            cutoffs = stats.cutoffs,
            cached = searcher.table.len(),
            "alpha-beta search finished"
        );

        match best {
            Some((index, value)) => (Decision::Move { board: moves[index], value }, stats),
            None => (Decision::NoMove, stats),
        }
    }

    /// Play a complete game, alternating sides from `first`.
    ///
    /// Stops when the side to move has no move, or after `max_plies` plies.
    pub fn play_game(&self, initial: Board, first: Side, max_plies: Option<u32>) -> GameRecord {
        let mut boards = vec![initial];
        let mut current = initial;
        let mut side = first;
        let mut plies = 0;
        let mut totals = SearchStats::default();

        let winner = loop {
            if max_plies.is_some_and(|limit| plies >= limit) {
                tracing::warn!(plies, "ply limit reached, stopping game");
                break None;
            }

            let (decision, stats) = self.search(&current, side);
            totals += stats;

            match decision {
                Decision::NoMove => break Some(side.opponent()),
                Decision::Move { board, value } => {
                    tracing::debug!(ply = plies + 1, ?side, value, "move chosen");
                    boards.push(board);
                    current = board;
                    side = side.opponent();
                    plies += 1;
                }
            }
        };

        GameRecord {
            boards,
            plies,
            winner,
            stats: totals,
        }
    }
}

// ============================================================================
// NEGAMAX WITH ALPHA-BETA
// ============================================================================

#[derive(Default)]
struct Searcher {
    table: TTable,
    stats: SearchStats,
}

impl Searcher {
    /// Value of `board` for `side` to move, searching `remaining` more plies
    fn negamax(
        &mut self,
        board: &Board,
        side: Side,
        remaining: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;
        let alpha_orig = alpha;

        if let Some(entry) = self.table.probe(board, side, remaining) {
            self.stats.cache_hits += 1;
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }

        let moves = successors(board, side);
        let score = match terminal_utility(board, side, side, !moves.is_empty()) {
            Utility::Terminal(score) => score_with_depth(score, remaining),
            Utility::NonTerminal if remaining == 0 => evaluate(board, side),
            Utility::NonTerminal => {
                let mut best = -INFINITY;
                for child in &moves {
                    let score = -self.negamax(child, side.opponent(), remaining - 1, -beta, -alpha);
                    best = best.max(score);
                    alpha = alpha.max(score);
                    if alpha >= beta {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                best
            }
        };

        let bound = if score <= alpha_orig {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.table.store(
            board,
            side,
            TTEntry {
                score,
                depth: remaining,
                bound,
            },
        );

        score
    }
}

// ============================================================================
// TESTS
// ============================================================================

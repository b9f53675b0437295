//! Depth-first and A* search with multi-path pruning
//!
//! Both algorithms share one loop and differ only in the frontier:
//! - DFS pops the most recently pushed state
//! - A* pops the lowest f, breaking ties by the board's content id and
//!   then by arena order, so runs are reproducible
//!
//! A state whose grid was already expanded is dropped when popped.

use super::board::{Board, Grid};
use super::state::{NodeId, SearchTree, State};
use crate::config::PuzzleConfig;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// TYPES
// ============================================================================

/// Search strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dfs,
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}

/// Search counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States taken off the frontier and expanded
    pub expanded: usize,
    /// States created, root included
    pub generated: usize,
    /// States dropped because their grid was already expanded
    pub pruned: usize,
}

/// Result of one puzzle search
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    /// Boards from the initial position to the solved one, or None
    pub solution: Option<Vec<Board>>,
    pub stats: SearchStats,
    /// True when `max_expansions` stopped the search
    pub capped: bool,
}

impl SearchReport {
    /// Number of slides in the solution
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len().saturating_sub(1))
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

// ============================================================================
// FRONTIERS
// ============================================================================

trait Frontier {
    fn push(&mut self, node: NodeId, state: &State);
    fn pop(&mut self) -> Option<NodeId>;
}

/// LIFO frontier for depth-first search
#[derive(Default)]
struct Stack(Vec<NodeId>);

impl Frontier for Stack {
    fn push(&mut self, node: NodeId, _state: &State) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }
}

/// Heap key; field order gives the pop order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    f: u32,
    id: u64,
    node: NodeId,
}

/// Min-heap on (f, content id, arena order)
#[derive(Default)]
struct PriorityQueue(BinaryHeap<Reverse<FrontierEntry>>);

impl Frontier for PriorityQueue {
    fn push(&mut self, node: NodeId, state: &State) {
        self.0.push(Reverse(FrontierEntry {
            f: state.f,
            id: state.id,
            node,
        }));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop().map(|Reverse(entry)| entry.node)
    }
}

// ============================================================================
// SEARCH
// ============================================================================

/// Solve `board` with the chosen algorithm
pub fn solve(board: Board, algorithm: Algorithm, config: &PuzzleConfig) -> SearchReport {
    match algorithm {
        Algorithm::Dfs => dfs(board, config),
        Algorithm::AStar => astar(board, config),
    }
}

/// Depth-first search. Finds a solution, not necessarily a short one.
pub fn dfs(board: Board, config: &PuzzleConfig) -> SearchReport {
    run(board, Algorithm::Dfs, Stack::default(), config)
}

/// A* search. The first goal expanded is on a shortest path.
pub fn astar(board: Board, config: &PuzzleConfig) -> SearchReport {
    run(board, Algorithm::AStar, PriorityQueue::default(), config)
}

fn run<F: Frontier>(
    board: Board,
    algorithm: Algorithm,
    mut frontier: F,
    config: &PuzzleConfig,
) -> SearchReport {
    let mut tree = SearchTree::new();
    let mut explored: FxHashSet<Grid> = FxHashSet::default();
    let mut stats = SearchStats::default();
    let mut capped = false;
    let mut solution = None;

    let root = tree.add(State::root(board));
    frontier.push(root, tree.get(root));
    stats.generated += 1;

    while let Some(node) = frontier.pop() {
        let state = tree.get(node);
        if !explored.insert(*state.board.grid()) {
            stats.pruned += 1;
            continue;
        }

        if state.is_goal() {
            solution = Some(tree.path_to(node));
            break;
        }

        if config.max_expansions.is_some_and(|limit| stats.expanded >= limit) {
            tracing::warn!(
                %algorithm,
                expanded = stats.expanded,
                "expansion limit reached, giving up"
            );
            capped = true;
            break;
        }

        stats.expanded += 1;
        for child in state.expand(node) {
            let id = tree.add(child);
            frontier.push(id, tree.get(id));
            stats.generated += 1;
        }
    }

    tracing::debug!(
        %algorithm,
        solved = solution.is_some(),
        expanded = stats.expanded,
        generated = stats.generated,
        pruned = stats.pruned,
        "puzzle search finished"
    );

    SearchReport {
        algorithm,
        solution,
        stats,
        capped,
    }
}

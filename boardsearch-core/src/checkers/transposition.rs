//! Transposition cache for one alpha-beta search

use super::board::{Board, Side};
use super::eval::Score;
use rustc_hash::FxHashMap;

/// How a stored score relates to the true value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// True value is at least the score (search failed high)
    Lower,
    /// True value is at most the score (search failed low)
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub score: Score,
    /// Plies searched below the stored position
    pub depth: u32,
    pub bound: Bound,
}

/// Cache keyed by board content and side to move. Never evicted; dropped
/// with the search that owns it.
#[derive(Debug, Default)]
pub struct TTable {
    entries: FxHashMap<(Board, Side), TTEntry>,
}

impl TTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry stored for a search of exactly `depth` plies, if any.
    ///
    /// Terminal scores carry a depth bonus, so a result from a different
    /// depth is not interchangeable.
    pub fn probe(&self, board: &Board, side: Side, depth: u32) -> Option<TTEntry> {
        self.entries
            .get(&(*board, side))
            .copied()
            .filter(|entry| entry.depth == depth)
    }

    /// Store a result, keeping whichever entry was searched deeper
    pub fn store(&mut self, board: &Board, side: Side, entry: TTEntry) {
        let slot = self.entries.entry((*board, side)).or_insert(entry);
        if entry.depth >= slot.depth {
            *slot = entry;
        }
    }
}

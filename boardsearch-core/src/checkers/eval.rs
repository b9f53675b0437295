//! Terminal utility and static evaluation

use super::board::{Board, Side};
use super::movegen::successors;

/// Search score, from the perspective of one side
pub type Score = i32;

/// Win value (stands in for infinity)
pub const WIN_VALUE: Score = 100_000;

/// Result of the terminal test
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Utility {
    /// Play continues; use the static evaluation instead
    NonTerminal,
    /// Game over: `WIN_VALUE` or `-WIN_VALUE`
    Terminal(Score),
}

/// Utility of `board` for `side` when `to_move` is about to move.
///
/// The game is over when either side has no pieces left, or when the side
/// to move has no legal move (that side loses).
pub fn utility(board: &Board, side: Side, to_move: Side) -> Utility {
    let has_moves = !successors(board, to_move).is_empty();
    terminal_utility(board, side, to_move, has_moves)
}

/// Terminal test when the mover's successors are already known
pub(crate) fn terminal_utility(board: &Board, side: Side, to_move: Side, has_moves: bool) -> Utility {
    if board.count(side) == 0 {
        return Utility::Terminal(-WIN_VALUE);
    }
    if board.count(side.opponent()) == 0 {
        return Utility::Terminal(WIN_VALUE);
    }
    if !has_moves {
        let score = if to_move == side { -WIN_VALUE } else { WIN_VALUE };
        return Utility::Terminal(score);
    }
    Utility::NonTerminal
}

/// Material balance: (2 * kings + men) for `side` minus the same for the opponent
pub fn evaluate(board: &Board, side: Side) -> Score {
    board.material(side) - board.material(side.opponent())
}

/// Terminal score adjusted so that nearer wins (more depth remaining) rank higher
pub fn score_with_depth(score: Score, remaining: u32) -> Score {
    let bonus = remaining as Score;
    if score > 0 {
        score + bonus
    } else {
        score - bonus
    }
}

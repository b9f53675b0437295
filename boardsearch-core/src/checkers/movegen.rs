//! Checkers successor generation
//!
//! A move is either a simple diagonal step or a capture extended to its
//! full jump chain. Captures are mandatory: when any piece of the side to
//! move can jump, only capture-derived boards are legal.

use super::board::{Board, Side, Square};
use super::pieces::{Direction, PieceKind};

/// Boards reachable by one piece in one full move
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PieceMoves {
    /// The piece can capture; simple steps are not offered
    Jumps(Vec<Board>),
    Steps(Vec<Board>),
}

/// All boards reachable by `side` in one full move.
///
/// Order: pieces row-major, then left-jump before right-jump (up before
/// down for kings), then left-step before right-step.
pub fn successors(board: &Board, side: Side) -> Vec<Board> {
    let mut jumps = Vec::new();
    let mut steps = Vec::new();

    for (from, piece) in board.pieces() {
        if piece.side() != side {
            continue;
        }
        match piece_moves(board, from) {
            PieceMoves::Jumps(boards) => jumps.extend(boards),
            PieceMoves::Steps(boards) => steps.extend(boards),
        }
    }

    if jumps.is_empty() {
        steps
    } else {
        jumps
    }
}

/// Check if any piece of `side` has a capture available
pub fn has_capture(board: &Board, side: Side) -> bool {
    board.pieces().any(|(from, piece)| {
        piece.side() == side
            && piece
                .rules()
                .directions
                .iter()
                .any(|&dir| jump_landing(board, from, piece, dir).is_some())
    })
}

/// Moves for the piece standing on `from` (empty when the square is empty)
pub fn piece_moves(board: &Board, from: Square) -> PieceMoves {
    let piece = match board.get(from) {
        Some(p) => p,
        None => return PieceMoves::Steps(Vec::new()),
    };

    let jumps = generate_jumps(board, from, piece);
    if !jumps.is_empty() {
        return PieceMoves::Jumps(jumps);
    }
    PieceMoves::Steps(generate_steps(board, from, piece))
}

// ============================================================================
// CAPTURES
// ============================================================================

/// Landing square of a legal jump from `from` in `dir`
fn jump_landing(board: &Board, from: Square, piece: PieceKind, dir: Direction) -> Option<Square> {
    let over = from.offset(dir, 1);
    let landing = from.offset(dir, 2);

    // Explicit edge check before looking at either cell
    if !over.is_valid() || !landing.is_valid() {
        return None;
    }

    match board.get(over) {
        Some(victim) if victim.side() != piece.side() && board.is_empty(landing) => Some(landing),
        _ => None,
    }
}

/// Apply one jump; returns the new board and the piece as it lands
fn apply_jump(
    board: &Board,
    from: Square,
    piece: PieceKind,
    dir: Direction,
) -> (Board, Square, PieceKind) {
    let landing = from.offset(dir, 2);
    let landed = piece.landing_on(landing.row);

    let mut next = *board;
    next.set(from, None);
    next.set(from.offset(dir, 1), None);
    next.set(landing, Some(landed));
    (next, landing, landed)
}

/// One board per first-jump direction, each extended to its full chain
fn generate_jumps(board: &Board, from: Square, piece: PieceKind) -> Vec<Board> {
    let mut result = Vec::new();

    for &dir in piece.rules().directions {
        if jump_landing(board, from, piece, dir).is_none() {
            continue;
        }
        let (next, landing, landed) = apply_jump(board, from, piece, dir);
        result.push(continue_chain(next, landing, piece, landed));
    }

    result
}

/// Keep jumping with the same piece, taking the first available direction
/// each time, until no capture remains. A man crowned on this move stops.
fn continue_chain(
    mut board: Board,
    mut pos: Square,
    started_as: PieceKind,
    mut piece: PieceKind,
) -> Board {
    while piece == started_as {
        let dir = piece
            .rules()
            .directions
            .iter()
            .copied()
            .find(|&dir| jump_landing(&board, pos, piece, dir).is_some());

        let Some(dir) = dir else { break };
        let (next, landing, landed) = apply_jump(&board, pos, piece, dir);
        board = next;
        pos = landing;
        piece = landed;
    }
    board
}

// ============================================================================
// SIMPLE MOVES
// ============================================================================

fn generate_steps(board: &Board, from: Square, piece: PieceKind) -> Vec<Board> {
    let mut result = Vec::new();

    for &dir in piece.rules().directions {
        let to = from.offset(dir, 1);
        if !board.is_empty(to) {
            continue;
        }
        let mut next = *board;
        next.set(from, None);
        next.set(to, Some(piece.landing_on(to.row)));
        result.push(next);
    }

    result
}

// ============================================================================
// TESTS
// ============================================================================

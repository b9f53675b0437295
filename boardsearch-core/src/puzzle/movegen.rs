//! Slide generation
//!
//! Every move slides one piece by one cell into an empty cell. A slide is
//! legal when each cell the piece newly covers is on the board and empty,
//! so a domino moving across its length and the goal piece both need two
//! empty cells side by side.

use super::board::{Board, Cell, Grid};
use rustc_hash::FxHashSet;

/// Where the moving piece sits relative to an empty cell, and the slide
/// that brings it in. Order: left, right, top, bottom.
const APPROACHES: [((i8, i8), (i8, i8)); 4] = [
    ((0, -1), (0, 1)),
    ((0, 1), (0, -1)),
    ((-1, 0), (1, 0)),
    ((1, 0), (-1, 0)),
];

/// All boards one slide away, without duplicates. Empty cells are taken
/// row-major; for a repeated grid the first-produced board is kept.
pub fn successor_boards(board: &Board) -> Vec<Board> {
    let mut result: Vec<Board> = Vec::new();
    let mut seen: FxHashSet<Grid> = FxHashSet::default();

    for empty in board.empty_cells() {
        for (neighbor, delta) in APPROACHES {
            let Some(next) = slide_into(board, empty, neighbor, delta) else {
                continue;
            };
            if seen.insert(*next.grid()) {
                result.push(next);
            }
        }
    }

    result
}

/// Slide the piece next to `empty` (at offset `neighbor`) by `delta`
fn slide_into(board: &Board, empty: Cell, neighbor: (i8, i8), delta: (i8, i8)) -> Option<Board> {
    let source = empty.offset(neighbor);
    if !source.is_valid() {
        return None;
    }
    let index = board.piece_at(source)?;
    slide(board, index, delta)
}

/// Move piece `index` by `delta` if every newly covered cell is empty
pub fn slide(board: &Board, index: usize, delta: (i8, i8)) -> Option<Board> {
    let piece = *board.pieces().get(index)?;
    let moved = piece.shifted(delta);

    let fits = moved
        .footprint()
        .all(|(cell, _)| piece.covers(cell) || board.is_empty(cell));
    if !fits {
        return None;
    }

    Some(board.with_piece_moved(index, moved))
}

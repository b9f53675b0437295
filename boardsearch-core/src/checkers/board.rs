//! Checkers board: an 8x8 grid of cells, stored by value

use super::pieces::{Direction, PieceKind};
use crate::error::BoardError;
use crate::text::grid_rows;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Board width and height
pub const BOARD_SIZE: usize = 8;

const EMPTY_GLYPH: char = '.';

/// Player color. Red starts at the bottom and moves toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }
}

/// Board coordinate (row 0 is the top line of the text grid)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this square is on the board
    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE as i8).contains(&self.row) && (0..BOARD_SIZE as i8).contains(&self.col)
    }

    /// Square `steps` diagonal cells away in `dir`
    pub fn offset(&self, dir: Direction, steps: i8) -> Square {
        Square::new(self.row + dir.0 * steps, self.col + dir.1 * steps)
    }
}

/// Checkers position. Copying a board copies all 64 cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<PieceKind>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Parse the text grid (`r`, `R`, `b`, `B`, `.`), one row per line
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let rows = grid_rows(text);

        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_SIZE {
                return Err(BoardError::RowWidth {
                    row,
                    expected: BOARD_SIZE,
                    found: width,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                board.cells[row][col] = match glyph {
                    EMPTY_GLYPH => None,
                    _ => Some(
                        PieceKind::from_glyph(glyph)
                            .ok_or(BoardError::UnknownGlyph { glyph, row, col })?,
                    ),
                };
            }
        }
        Ok(board)
    }

    /// Piece on a square (None for empty or off-board)
    pub fn get(&self, sq: Square) -> Option<PieceKind> {
        if !sq.is_valid() {
            return None;
        }
        self.cells[sq.row as usize][sq.col as usize]
    }

    /// Check if an on-board square is empty
    pub fn is_empty(&self, sq: Square) -> bool {
        sq.is_valid() && self.cells[sq.row as usize][sq.col as usize].is_none()
    }

    /// Place or clear a piece. Off-board squares are ignored.
    pub fn set(&mut self, sq: Square, piece: Option<PieceKind>) {
        if sq.is_valid() {
            self.cells[sq.row as usize][sq.col as usize] = piece;
        }
    }

    /// Builder used to lay out positions
    pub fn with_piece(mut self, row: i8, col: i8, piece: PieceKind) -> Self {
        self.set(Square::new(row, col), Some(piece));
        self
    }

    /// Pieces in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as i8, col as i8), piece))
            })
        })
    }

    /// Number of pieces owned by `side`
    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side() == side).count()
    }

    /// Number of kings owned by `side`
    pub fn kings(&self, side: Side) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.side() == side && piece.is_king())
            .count()
    }

    /// Men plus twice the kings owned by `side`
    pub fn material(&self, side: Side) -> i32 {
        self.pieces()
            .filter(|(_, piece)| piece.side() == side)
            .map(|(_, piece)| piece.value())
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            for cell in line {
                let glyph = cell.map_or(EMPTY_GLYPH, PieceKind::glyph);
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPENING: &str = "\
.b.b.b.b
b.b.b.b.
.b.b.b.b
........
........
r.r.r.r.
.r.r.r.r
r.r.r.r.
";

    #[test]
    fn test_parse_and_render() {
        let board = Board::parse(OPENING).unwrap();
        assert_eq!(board.count(Side::Red), 12);
        assert_eq!(board.count(Side::Black), 12);
        assert_eq!(board.to_string(), OPENING);
        assert_eq!(Board::parse(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn test_parse_tolerates_trailing_blank_lines() {
        let text = format!("{}\n\n", OPENING);
        assert!(Board::parse(&text).is_ok());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::parse("........\n"),
            Err(BoardError::RowCount { expected: 8, found: 1 })
        );
        let bad_width = OPENING.replacen(".b.b.b.b", ".b.b.b.", 1);
        assert_eq!(
            Board::parse(&bad_width),
            Err(BoardError::RowWidth { row: 0, expected: 8, found: 7 })
        );
        let bad_glyph = OPENING.replacen('b', "x", 1);
        assert_eq!(
            Board::parse(&bad_glyph),
            Err(BoardError::UnknownGlyph { glyph: 'x', row: 0, col: 1 })
        );
    }

    #[test]
    fn test_material() {
        let board = Board::empty()
            .with_piece(0, 1, PieceKind::RedKing)
            .with_piece(5, 0, PieceKind::RedMan)
            .with_piece(2, 3, PieceKind::BlackMan);
        assert_eq!(board.material(Side::Red), 3);
        assert_eq!(board.material(Side::Black), 1);
        assert_eq!(board.kings(Side::Red), 1);
    }

    #[test]
    fn test_square_validity() {
        assert!(Square::new(0, 0).is_valid());
        assert!(Square::new(7, 7).is_valid());
        assert!(!Square::new(-1, 3).is_valid());
        assert!(!Square::new(3, 8).is_valid());
        assert!(!Board::empty().is_empty(Square::new(8, 0)));
    }
}

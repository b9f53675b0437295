//! Checkers piece kinds and their movement rules

use super::board::{Side, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagonal step as (row delta, column delta)
pub type Direction = (i8, i8);

pub const UP_LEFT: Direction = (-1, -1);
pub const UP_RIGHT: Direction = (-1, 1);
pub const DOWN_LEFT: Direction = (1, -1);
pub const DOWN_RIGHT: Direction = (1, 1);

/// Direction lists are in generation order: left before right, up before down.
pub const UPWARD: &[Direction] = &[UP_LEFT, UP_RIGHT];
pub const DOWNWARD: &[Direction] = &[DOWN_LEFT, DOWN_RIGHT];
pub const ALL_DIAGONALS: &[Direction] = &[UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];

/// The closed set of checkers pieces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    RedMan = 0,
    RedKing = 1,
    BlackMan = 2,
    BlackKing = 3,
}

/// Movement data for one piece kind
#[derive(Clone, Debug)]
pub struct PieceRules {
    pub glyph: char,
    pub name: &'static str,
    pub side: Side,
    pub is_king: bool,
    pub directions: &'static [Direction],
    /// Row on which this kind is crowned, and what it becomes
    pub promotion: Option<(i8, PieceKind)>,
}

pub static PIECE_RULES: [PieceRules; 4] = [
    PieceRules {
        glyph: 'r',
        name: "red man",
        side: Side::Red,
        is_king: false,
        directions: UPWARD,
        promotion: Some((0, PieceKind::RedKing)),
    },
    PieceRules {
        glyph: 'R',
        name: "red king",
        side: Side::Red,
        is_king: true,
        directions: ALL_DIAGONALS,
        promotion: None,
    },
    PieceRules {
        glyph: 'b',
        name: "black man",
        side: Side::Black,
        is_king: false,
        directions: DOWNWARD,
        promotion: Some((BOARD_SIZE as i8 - 1, PieceKind::BlackKing)),
    },
    PieceRules {
        glyph: 'B',
        name: "black king",
        side: Side::Black,
        is_king: true,
        directions: ALL_DIAGONALS,
        promotion: None,
    },
];

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [
        PieceKind::RedMan,
        PieceKind::RedKing,
        PieceKind::BlackMan,
        PieceKind::BlackKing,
    ];

    pub fn rules(self) -> &'static PieceRules {
        &PIECE_RULES[self as usize]
    }

    pub fn side(self) -> Side {
        self.rules().side
    }

    pub fn is_king(self) -> bool {
        self.rules().is_king
    }

    pub fn glyph(self) -> char {
        self.rules().glyph
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.glyph() == glyph)
    }

    /// Kind after landing on `row` (crowned on the back rank)
    pub fn landing_on(self, row: i8) -> Self {
        match self.rules().promotion {
            Some((promotion_row, crowned)) if promotion_row == row => crowned,
            _ => self,
        }
    }

    /// Material weight: kings count double
    pub fn value(self) -> i32 {
        if self.is_king() {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rules().name)
    }
}

//! Board parsing errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} cells, found {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("glyph {glyph:?} at row {row}, column {col} does not belong to a whole piece")]
    BrokenPiece { glyph: char, row: usize, col: usize },

    #[error("expected {expected} empty cells, found {found}")]
    EmptyCells { expected: usize, found: usize },

    #[error("puzzle has no goal piece")]
    MissingGoal,
}

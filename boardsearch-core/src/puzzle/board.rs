//! Hua Rong Dao board: a 4x5 grid built from a piece list

use crate::error::BoardError;
use crate::text::grid_rows;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Board dimensions
pub const WIDTH: usize = 4;
pub const HEIGHT: usize = 5;

/// Number of empty cells on every board
pub const EMPTY_CELLS: usize = 2;

/// Where the goal piece's top-left cell must end up
pub const GOAL_TARGET: Cell = Cell::new(3, 1);

/// Board coordinate (row 0 is the top line of the text grid)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i8,
    pub col: i8,
}

impl Cell {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(&self) -> bool {
        (0..HEIGHT as i8).contains(&self.row) && (0..WIDTH as i8).contains(&self.col)
    }

    /// Neighbouring cell. Saturates instead of wrapping, so far-off cells
    /// stay off the board.
    pub fn offset(&self, (dr, dc): (i8, i8)) -> Cell {
        Cell::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// Manhattan distance
    pub fn distance_to(&self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }
}

/// Cell symbol in the text grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Empty,
    Goal,
    Single,
    /// Left half of a horizontal domino
    Left,
    Right,
    /// Top half of a vertical domino
    Top,
    Bottom,
}

impl Glyph {
    pub fn to_char(self) -> char {
        match self {
            Glyph::Empty => '.',
            Glyph::Goal => '1',
            Glyph::Single => '2',
            Glyph::Left => '<',
            Glyph::Right => '>',
            Glyph::Top => '^',
            Glyph::Bottom => 'v',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Glyph::Empty),
            '1' => Some(Glyph::Goal),
            '2' => Some(Glyph::Single),
            '<' => Some(Glyph::Left),
            '>' => Some(Glyph::Right),
            '^' => Some(Glyph::Top),
            'v' => Some(Glyph::Bottom),
            _ => None,
        }
    }
}

/// Cell contents of a whole board
pub type Grid = [[Glyph; WIDTH]; HEIGHT];

/// Piece footprint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// 2x2 piece that must reach the target
    Goal,
    /// 1x1
    Single,
    /// 1 row, 2 columns
    Horizontal,
    /// 2 rows, 1 column
    Vertical,
}

impl Shape {
    /// (rows, columns) covered
    pub fn size(self) -> (i8, i8) {
        match self {
            Shape::Goal => (2, 2),
            Shape::Single => (1, 1),
            Shape::Horizontal => (1, 2),
            Shape::Vertical => (2, 1),
        }
    }

    /// Glyph drawn at offset (dr, dc) from the top-left cell
    fn glyph_at(self, dr: i8, dc: i8) -> Glyph {
        match self {
            Shape::Goal => Glyph::Goal,
            Shape::Single => Glyph::Single,
            Shape::Horizontal if dc == 0 => Glyph::Left,
            Shape::Horizontal => Glyph::Right,
            Shape::Vertical if dr == 0 => Glyph::Top,
            Shape::Vertical => Glyph::Bottom,
        }
    }
}

/// A piece, identified by its shape and top-left cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub origin: Cell,
}

impl Piece {
    pub const fn new(shape: Shape, row: i8, col: i8) -> Self {
        Self {
            shape,
            origin: Cell::new(row, col),
        }
    }

    /// Covered cells with the glyph drawn on each, row-major
    pub fn footprint(&self) -> impl Iterator<Item = (Cell, Glyph)> + '_ {
        let (rows, cols) = self.shape.size();
        (0..rows).flat_map(move |dr| {
            (0..cols).map(move |dc| (self.origin.offset((dr, dc)), self.shape.glyph_at(dr, dc)))
        })
    }

    pub fn covers(&self, cell: Cell) -> bool {
        let (rows, cols) = self.shape.size();
        (self.origin.row..self.origin.row.saturating_add(rows)).contains(&cell.row)
            && (self.origin.col..self.origin.col.saturating_add(cols)).contains(&cell.col)
    }

    /// Same piece moved by (dr, dc)
    pub fn shifted(&self, delta: (i8, i8)) -> Piece {
        Piece {
            shape: self.shape,
            origin: self.origin.offset(delta),
        }
    }
}

/// Puzzle position: piece list plus the grid drawn from it
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pieces: Vec<Piece>,
    grid: Grid,
}

impl Board {
    /// Build a board, checking that pieces stay on the board, never overlap,
    /// leave exactly two empty cells, and include a goal piece.
    pub fn new(pieces: Vec<Piece>) -> Result<Self, BoardError> {
        let mut grid = [[Glyph::Empty; WIDTH]; HEIGHT];
        let mut covered = 0;

        for piece in &pieces {
            for (cell, glyph) in piece.footprint() {
                let taken = cell.is_valid() && grid[cell.row as usize][cell.col as usize] != Glyph::Empty;
                if !cell.is_valid() || taken {
                    let origin = piece.origin;
                    return Err(BoardError::BrokenPiece {
                        glyph: piece.shape.glyph_at(0, 0).to_char(),
                        row: origin.row.max(0) as usize,
                        col: origin.col.max(0) as usize,
                    });
                }
                grid[cell.row as usize][cell.col as usize] = glyph;
                covered += 1;
            }
        }

        let empty = WIDTH * HEIGHT - covered;
        if empty != EMPTY_CELLS {
            return Err(BoardError::EmptyCells {
                expected: EMPTY_CELLS,
                found: empty,
            });
        }
        if !pieces.iter().any(|p| p.shape == Shape::Goal) {
            return Err(BoardError::MissingGoal);
        }

        Ok(Self { pieces, grid })
    }

    /// Parse the glyph grid. The first `1` seen (row-major) is the goal
    /// piece's top-left cell; dominoes are read from their `<` / `^` half.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let rows = grid_rows(text);
        if rows.len() != HEIGHT {
            return Err(BoardError::RowCount {
                expected: HEIGHT,
                found: rows.len(),
            });
        }

        let mut input = [[Glyph::Empty; WIDTH]; HEIGHT];
        let mut pieces = Vec::new();
        let mut goal_found = false;

        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != WIDTH {
                return Err(BoardError::RowWidth {
                    row,
                    expected: WIDTH,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let glyph = Glyph::from_char(ch).ok_or(BoardError::UnknownGlyph { glyph: ch, row, col })?;
                input[row][col] = glyph;

                let shape = match glyph {
                    Glyph::Goal if !goal_found => {
                        goal_found = true;
                        Shape::Goal
                    }
                    Glyph::Single => Shape::Single,
                    Glyph::Left => Shape::Horizontal,
                    Glyph::Top => Shape::Vertical,
                    _ => continue,
                };
                pieces.push(Piece::new(shape, row as i8, col as i8));
            }
        }

        let board = Board::new(pieces)?;

        // Every glyph must be explained by the piece list
        for (row, (drawn, read)) in board.grid.iter().zip(input.iter()).enumerate() {
            for (col, (&drawn, &read)) in drawn.iter().zip(read.iter()).enumerate() {
                if drawn != read {
                    return Err(BoardError::BrokenPiece {
                        glyph: read.to_char(),
                        row,
                        col,
                    });
                }
            }
        }

        Ok(board)
    }

    /// Board after replacing piece `index` with `moved`. The caller
    /// guarantees the moved footprint only covers cells that were empty or
    /// belonged to the piece.
    pub(crate) fn with_piece_moved(&self, index: usize, moved: Piece) -> Board {
        let mut next = self.clone();
        for (cell, _) in self.pieces[index].footprint() {
            next.grid[cell.row as usize][cell.col as usize] = Glyph::Empty;
        }
        for (cell, glyph) in moved.footprint() {
            next.grid[cell.row as usize][cell.col as usize] = glyph;
        }
        next.pieces[index] = moved;
        next
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Glyph on a cell (None off-board)
    pub fn glyph(&self, cell: Cell) -> Option<Glyph> {
        if !cell.is_valid() {
            return None;
        }
        Some(self.grid[cell.row as usize][cell.col as usize])
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.glyph(cell) == Some(Glyph::Empty)
    }

    /// The goal piece
    pub fn goal(&self) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.shape == Shape::Goal)
    }

    /// Empty cells, row-major
    pub fn empty_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(EMPTY_CELLS);
        for (row, line) in self.grid.iter().enumerate() {
            for (col, &glyph) in line.iter().enumerate() {
                if glyph == Glyph::Empty {
                    cells.push(Cell::new(row as i8, col as i8));
                }
            }
        }
        cells
    }

    /// Index of the piece covering `cell`
    pub fn piece_at(&self, cell: Cell) -> Option<usize> {
        self.pieces.iter().position(|p| p.covers(cell))
    }

    /// Stable identifier derived from the grid content
    pub fn content_id(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.grid.hash(&mut hasher);
        hasher.finish()
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
        for line in &self.grid {
            for glyph in line {
                write!(f, "{}", glyph.to_char())?;
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

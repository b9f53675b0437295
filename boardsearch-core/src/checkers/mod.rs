//! Checkers engine
//!
//! - Board model and text grid
//! - Piece kinds with their movement rules
//! - Successor generation (forced captures, jump chains, crowning)
//! - Material evaluation and terminal utility
//! - Alpha-beta search with a per-search transposition cache

pub mod board;
pub mod pieces;
pub mod movegen;
pub mod eval;
pub mod transposition;
pub mod ai;

pub use ai::{AlphaBetaAI, Decision, GameRecord, SearchStats};
pub use board::{Board, Side, Square, BOARD_SIZE};
pub use eval::{evaluate, utility, Score, Utility, WIN_VALUE};
pub use movegen::{has_capture, piece_moves, successors, PieceMoves};
pub use pieces::PieceKind;

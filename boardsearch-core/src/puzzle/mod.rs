//! Hua Rong Dao sliding-block puzzle
//!
//! - Board model built from a piece list, with text parsing
//! - Slide generation for the four piece shapes
//! - Search states kept in an arena, goal test and Manhattan heuristic
//! - DFS and A* with an explored set

pub mod board;
pub mod movegen;
pub mod state;
pub mod search;

pub use board::{Board, Cell, Glyph, Grid, Piece, Shape, GOAL_TARGET, HEIGHT, WIDTH};
pub use movegen::{slide, successor_boards};
pub use search::{astar, dfs, solve, Algorithm, SearchReport, SearchStats};
pub use state::{goal_test, heuristic, NodeId, SearchTree, State};

//! boardsearch core - two board-search engines
//!
//! This crate provides:
//! - Checkers: 8x8 board model, move generation with forced captures and
//!   multi-jump chains, material evaluation, alpha-beta search with a
//!   transposition cache
//! - Hua Rong Dao sliding-block puzzle: 4x5 board model, slide generation,
//!   depth-first and A* search with multi-path pruning
//! - Text parsing/rendering of both boards
//! - JSON engine configuration

pub mod error;
pub mod config;
pub mod text;
pub mod checkers;
pub mod puzzle;

// Re-exports for convenient access
pub use error::BoardError;
pub use config::{CheckersConfig, EngineConfig, PuzzleConfig};
pub use checkers::{AlphaBetaAI, Decision, GameRecord, Side};
pub use puzzle::{Algorithm, SearchReport};

//! Perfect-play engine for Tic-Tac-Toe
//!
//! This crate provides:
//! - Depth-biased minimax search over any mutable two-player game state
//! - A Tic-Tac-Toe board implementing that state, plus a game loop
//! - Search, random and interactive player strategies
//! - Computer-versus-computer series with JSON summaries
//! - The `perfect_play` command-line front end

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod strategies;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Pruning, SearchEngine, SearchResult, SearchStats, best_move};

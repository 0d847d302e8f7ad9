//! Tic-Tac-Toe board, rules and game loop

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_SIZE, Board, Cell, Player};
pub use game::{Game, GameOutcome, Move, play_game};
pub use lines::{LineAnalyzer, WINNING_LINES};

//! Strategy port - abstraction over anything that picks a move for a player
//!
//! Implementations in [`crate::strategies`]:
//! - Search-driven perfect play (minimax)
//! - Uniform random baseline
//! - Interactive (a human at a terminal)

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Strategy trait - unified "choose a move" capability for every player kind
///
/// # Examples
///
/// ```
/// use perfect_play::{
///     ports::Strategy,
///     strategies::SearchStrategy,
///     tictactoe::{Board, Player},
/// };
///
/// let board = Board::from_string("XX./OO./...")?;
/// let mut strategy = SearchStrategy::new("Minimax".to_string());
/// assert_eq!(strategy.select_move(&board, Player::O)?, 5);
/// # Ok::<(), perfect_play::Error>(())
/// ```
pub trait Strategy {
    /// Select a move for `player` on `board`.
    ///
    /// The board is borrowed immutably: a strategy that needs to explore
    /// works on its own copy.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available (terminal board) or
    /// if the strategy's input source fails.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize>;

    /// Human-readable name used in logs and match reports.
    fn name(&self) -> &str;
}

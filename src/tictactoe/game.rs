//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::board::{Board, Player};
use crate::ports::Strategy;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress or finished, with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game with `first` to move
    pub fn new(first: Player) -> Self {
        Game {
            board: Board::new(),
            to_move: first,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves played so far
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Final outcome, once the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Whether the game has finished
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play a move for the player to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has finished, and the
    /// board's error for out-of-range or occupied positions.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move;
        self.board.make_move(position, player)?;
        self.moves.push(Move { position, player });
        trace!(%player, position, "move played");

        if let Some(winner) = self.board.current_winner() {
            self.outcome = Some(GameOutcome::Win(winner));
        } else if !self.board.has_empty_squares() {
            self.outcome = Some(GameOutcome::Draw);
        }

        if let Some(outcome) = self.outcome {
            debug!(?outcome, moves = self.moves.len(), "game finished");
        }

        self.to_move = player.opponent();
        Ok(())
    }

    /// Ask `strategy` for a move on behalf of the player to move and play it.
    ///
    /// # Errors
    ///
    /// Propagates strategy failures and rejects illegal moves it returns.
    pub fn play_turn(&mut self, strategy: &mut dyn Strategy) -> Result<Move, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }
        let player = self.to_move;
        let position = strategy.select_move(&self.board, player)?;
        self.play(position)?;
        Ok(Move { position, player })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

/// Play a complete game between two strategies.
///
/// `on_move` is called after every move with the updated game, which is how
/// the terminal front end prints the board.
///
/// # Errors
///
/// Propagates the first strategy or move error.
pub fn play_game(
    x: &mut dyn Strategy,
    o: &mut dyn Strategy,
    first: Player,
    mut on_move: impl FnMut(&Game, Move),
) -> Result<Game, crate::Error> {
    let mut game = Game::new(first);
    while !game.is_over() {
        let strategy: &mut dyn Strategy = match game.to_move() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let mv = game.play_turn(strategy)?;
        on_move(&game, mv);
    }
    Ok(game)
}

//! Uniform random strategy

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, Player},
};

/// Random policy (baseline)
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a new random strategy
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random strategy with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize> {
        if board.is_terminal() {
            return Err(crate::Error::NoValidMoves);
        }
        let moves = board.available_moves();
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picks_empty_cell() {
        let board = Board::from_string("XOX/.O./X.O").unwrap();
        let mut strategy = RandomStrategy::with_seed("Random".to_string(), 7);
        for _ in 0..20 {
            let mv = strategy.select_move(&board, Player::X).unwrap();
            assert!(board.is_empty(mv));
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let board = Board::new();
        let mut a = RandomStrategy::with_seed("A".to_string(), 42);
        let mut b = RandomStrategy::with_seed("B".to_string(), 42);
        for _ in 0..10 {
            assert_eq!(
                a.select_move(&board, Player::X).unwrap(),
                b.select_move(&board, Player::X).unwrap()
            );
        }
    }

    #[test]
    fn test_random_rejects_finished_board() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let mut strategy = RandomStrategy::with_seed("Random".to_string(), 1);
        assert!(matches!(
            strategy.select_move(&board, Player::O),
            Err(crate::Error::NoValidMoves)
        ));
    }
}

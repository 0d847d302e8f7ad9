//! Search-driven strategy (perfect play)

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::debug;

use crate::{
    Result,
    ports::Strategy,
    search::{Pruning, SearchEngine, SearchResult},
    tictactoe::{Board, Player, board::BOARD_SIZE},
};

/// Perfect-play strategy backed by [`SearchEngine`].
///
/// The strategy is always the maximizer of its own searches. On an empty
/// board every opening is equally good by symmetry, so by default it skips
/// the search and opens on a random cell.
pub struct SearchStrategy {
    name: String,
    engine: SearchEngine,
    opening_shortcut: bool,
    rng: StdRng,
}

impl SearchStrategy {
    /// Create a search strategy with the opening shortcut enabled
    pub fn new(name: String) -> Self {
        Self {
            name,
            engine: SearchEngine::default(),
            opening_shortcut: true,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a search strategy whose opening shortcut is reproducible
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(name)
        }
    }

    /// Set the pruning mode.
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.engine = SearchEngine::new(pruning);
        self
    }

    /// Enable or disable the random opening on an empty board.
    pub fn with_opening_shortcut(mut self, enabled: bool) -> Self {
        self.opening_shortcut = enabled;
        self
    }

    /// Full search result for `player` on a private copy of `board`.
    pub fn evaluate(&self, board: &Board, player: Player) -> SearchResult {
        let mut scratch = *board;
        self.engine.best_move(&mut scratch, player, player)
    }
}

impl Strategy for SearchStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        if board.is_terminal() {
            return Err(crate::Error::NoValidMoves);
        }

        if self.opening_shortcut && board.num_empty_squares() == BOARD_SIZE {
            let position = self.rng.random_range(0..BOARD_SIZE);
            debug!(strategy = %self.name, position, "opening shortcut");
            return Ok(position);
        }

        self.evaluate(board, player)
            .position()
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

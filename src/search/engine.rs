//! Search engine configuration and accounting

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::minimax::{SearchResult, alpha_beta, assert_searchable, minimax};
use crate::ports::GameState;

/// How the engine trims the game tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pruning {
    /// Visit every continuation.
    #[default]
    None,
    /// Alpha-beta cutoffs; same result, fewer nodes.
    AlphaBeta,
}

impl fmt::Display for Pruning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pruning::None => write!(f, "none"),
            Pruning::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

/// Counters collected during one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, including the root.
    pub nodes: u64,
    /// Terminal positions scored.
    pub leaves: u64,
}

/// Stateless minimax engine.
///
/// The only thing it carries is configuration; the maximizer is passed to
/// every call, so one engine can serve both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchEngine {
    pruning: Pruning,
}

impl SearchEngine {
    /// Create an engine with the given pruning mode.
    pub fn new(pruning: Pruning) -> Self {
        Self { pruning }
    }

    /// Pruning mode in use.
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Best move for `mover` from `maximizer`'s point of view.
    ///
    /// `state` is mutated during the search and restored before returning.
    pub fn best_move<S: GameState>(
        &self,
        state: &mut S,
        mover: S::Player,
        maximizer: S::Player,
    ) -> SearchResult {
        self.search(state, mover, maximizer).0
    }

    /// Like [`SearchEngine::best_move`], also reporting visited-node counts.
    ///
    /// # Panics
    ///
    /// Panics if `mover` has already won the position.
    pub fn search<S: GameState>(
        &self,
        state: &mut S,
        mover: S::Player,
        maximizer: S::Player,
    ) -> (SearchResult, SearchStats) {
        assert_searchable(state, mover);
        trace!(
            ?mover,
            ?maximizer,
            empty = state.num_empty(),
            pruning = %self.pruning,
            "starting search"
        );

        let mut stats = SearchStats::default();
        let result = match self.pruning {
            Pruning::None => minimax(state, mover, maximizer, &mut stats),
            Pruning::AlphaBeta => {
                alpha_beta(state, mover, maximizer, i32::MIN, i32::MAX, &mut stats)
            }
        };

        debug!(
            position = ?result.position(),
            score = result.score(),
            nodes = stats.nodes,
            leaves = stats.leaves,
            "search complete"
        );
        (result, stats)
    }
}

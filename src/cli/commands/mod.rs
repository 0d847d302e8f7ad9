//! Subcommand implementations

pub mod play;
pub mod solve;
pub mod versus;

use anyhow::{Result, anyhow};

use super::config::SearchConfig;
use crate::{
    ports::Strategy,
    strategies::{RandomStrategy, SearchStrategy, StrategyKind},
    tictactoe::Player,
};

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    Player::parse(value)
        .map_err(|_| anyhow!("Invalid value '{value}' for {flag} (expected 'x' or 'o')"))
}

/// Build a computer strategy, deriving its seed from `seed` when given.
pub(crate) fn build_strategy(
    kind: StrategyKind,
    name: String,
    seed: Option<u64>,
    search: SearchConfig,
) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Search => {
            let strategy = match seed {
                Some(seed) => SearchStrategy::with_seed(name, seed),
                None => SearchStrategy::new(name),
            };
            Box::new(
                strategy
                    .with_pruning(search.pruning)
                    .with_opening_shortcut(search.opening_shortcut),
            )
        }
        StrategyKind::Random => Box::new(match seed {
            Some(seed) => RandomStrategy::with_seed(name, seed),
            None => RandomStrategy::new(name),
        }),
    }
}

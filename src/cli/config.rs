//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::{pipeline::MatchConfig, search::Pruning, strategies::StrategyKind, tictactoe::Player};

/// Search settings shared by every command that runs the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tree pruning mode
    pub pruning: Pruning,

    /// Open on a random cell instead of searching an empty board
    pub opening_shortcut: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: Pruning::None,
            opening_shortcut: true,
        }
    }
}

/// Human-versus-computer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark controlled by the human
    pub human: Player,

    /// Computer strategy
    pub opponent: StrategyKind,

    /// Who opens the game
    pub first: Player,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Engine settings for a search opponent
    pub search: SearchConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            opponent: StrategyKind::Search,
            first: Player::X,
            seed: None,
            search: SearchConfig::default(),
        }
    }
}

/// Computer-versus-computer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersusConfig {
    /// Strategy playing X
    pub x: StrategyKind,

    /// Strategy playing O
    pub o: StrategyKind,

    /// Series settings
    pub series: MatchConfig,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Engine settings for search strategies
    pub search: SearchConfig,
}

impl Default for VersusConfig {
    fn default() -> Self {
        Self {
            x: StrategyKind::Search,
            o: StrategyKind::Random,
            series: MatchConfig::default(),
            seed: None,
            search: SearchConfig::default(),
        }
    }
}

//! Player strategies
//!
//! Every way of choosing a move implements [`crate::ports::Strategy`]:
//! - [`SearchStrategy`]: perfect play via the minimax engine
//! - [`RandomStrategy`]: uniform random baseline
//! - [`InteractiveStrategy`]: a human typing cell numbers

pub mod interactive;
pub mod random;
pub mod search;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use interactive::InteractiveStrategy;
pub use random::RandomStrategy;
pub use search::SearchStrategy;

/// Computer strategy kinds selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Search,
    Random,
}

impl StrategyKind {
    /// Accepted names, for error messages and help text.
    pub const NAMES: &'static str = "search, random";
}

impl FromStr for StrategyKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "search" | "minimax" | "optimal" | "ai" => Ok(StrategyKind::Search),
            "random" => Ok(StrategyKind::Random),
            other => Err(crate::Error::UnknownStrategy {
                name: other.to_string(),
                expected: Self::NAMES.to_string(),
            }),
        }
    }
}

//! Perfect-play adversarial search
//!
//! - [`minimax`]: the exhaustive depth-biased minimax and its alpha-beta twin
//! - [`engine`]: configuration, node accounting and logging around them

pub mod engine;
pub mod minimax;

pub use engine::{Pruning, SearchEngine, SearchStats};
pub use minimax::{SearchResult, best_move, best_move_alpha_beta};

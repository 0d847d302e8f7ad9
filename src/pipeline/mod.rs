//! Match pipeline: repeated games between two strategies
//!
//! This module provides:
//! - [`MatchRunner`] for playing a series of games with optional progress
//! - [`MatchSummary`] tallies that can be saved to and loaded from JSON

pub mod series;

pub use series::{MatchConfig, MatchRunner, MatchSummary};

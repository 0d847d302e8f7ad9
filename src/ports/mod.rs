//! Ports (trait boundaries) between the search core and its collaborators.
//!
//! The engine only ever talks to a [`GameState`]; everything that decides a
//! move on behalf of a player sits behind [`Strategy`].

pub mod game_state;
pub mod strategy;

pub use game_state::{GameState, Side};
pub use strategy::Strategy;

//! Game state port - the mutable position the search engine explores

use std::fmt::Debug;

/// One of the two competing identities in a two-player game.
pub trait Side: Copy + Eq + Debug {
    /// The other side.
    fn opponent(self) -> Self;
}

/// Mutable game position shared between the caller and the search engine.
///
/// The engine places and clears marks in place while exploring and relies on
/// [`GameState::clear`] to undo [`GameState::place`] exactly. Any finite,
/// deterministic, two-player, zero-sum game whose moves are "claim an empty
/// cell" fits this shape.
///
/// # Invariants
///
/// * `empty_cells().len() == num_empty()` at all times.
/// * `place(p, s)` followed by `clear(p)` leaves the state equal to what it
///   was before the `place`, including any cached winner.
/// * `empty_cells()` is in ascending index order. The engine breaks ties by
///   exploration order, so this order decides which of several equally good
///   moves is returned.
pub trait GameState {
    /// Identity of a player in this game.
    type Player: Side;

    /// Indices of all currently empty cells, ascending.
    fn empty_cells(&self) -> Vec<usize>;

    /// Number of empty cells.
    fn num_empty(&self) -> usize;

    /// Claim `position` for `player`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `position` is not empty; callers must only
    /// pass indices taken from [`GameState::empty_cells`].
    fn place(&mut self, position: usize, player: Self::Player);

    /// Empty `position` again and drop any cached winner.
    fn clear(&mut self, position: usize);

    /// Whether `player` currently holds a winning configuration.
    fn has_won(&self, player: Self::Player) -> bool;
}

//! Depth-biased minimax over a mutable [`GameState`].
//!
//! Scores are always relative to a fixed maximizer:
//!
//! * a position already won by the side that just moved scores
//!   `±(empty cells + 1)`, positive when that side is the maximizer;
//! * a full board with no winner scores `0`.
//!
//! The `+1` bias makes a win that leaves more cells empty (a faster win)
//! strictly better than a slower one, and a slower loss strictly better than
//! a faster one.
//!
//! Both searches place marks in the caller's state and clear them again on
//! the way back up, so the state is identical before and after every call.

use serde::{Deserialize, Serialize};

use super::engine::SearchStats;
use crate::ports::{GameState, Side};

/// Outcome of a search: the move to play (if any) and its score.
///
/// `position` is `None` only for terminal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    position: Option<usize>,
    score: i32,
}

impl SearchResult {
    /// Result for a position with no move left to make.
    pub fn terminal(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }

    /// Result recommending `position`.
    pub fn with_move(position: usize, score: i32) -> Self {
        Self {
            position: Some(position),
            score,
        }
    }

    /// The chosen cell, or `None` on a terminal position.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Score relative to the maximizer.
    pub fn score(&self) -> i32 {
        self.score
    }

    fn at(self, position: usize) -> Self {
        Self::with_move(position, self.score)
    }

    fn worst_for(maximizing: bool) -> Self {
        Self::terminal(if maximizing { i32::MIN } else { i32::MAX })
    }
}

/// Choose the best move for `mover`, optimising for `maximizer`.
///
/// Explores every continuation. Among equally scored moves the lowest index
/// wins.
///
/// # Panics
///
/// Panics if `mover` has already won: the position cannot arise with
/// `mover` to play, and undoing moves would not restore its cached winner.
///
/// # Examples
///
/// ```
/// use perfect_play::{search::best_move, tictactoe::{Board, Player}};
///
/// let mut board = Board::from_string("XX./OO./...")?;
/// let result = best_move(&mut board, Player::O, Player::O);
/// assert_eq!(result.position(), Some(5));
/// assert_eq!(result.score(), 5);
/// # Ok::<(), perfect_play::Error>(())
/// ```
pub fn best_move<S: GameState>(
    state: &mut S,
    mover: S::Player,
    maximizer: S::Player,
) -> SearchResult {
    assert_searchable(state, mover);
    minimax(state, mover, maximizer, &mut SearchStats::default())
}

/// Same contract as [`best_move`], pruned with alpha-beta.
///
/// Returns exactly the result [`best_move`] returns; only the number of
/// visited positions differs.
///
/// # Panics
///
/// Panics under the same condition as [`best_move`].
pub fn best_move_alpha_beta<S: GameState>(
    state: &mut S,
    mover: S::Player,
    maximizer: S::Player,
) -> SearchResult {
    assert_searchable(state, mover);
    alpha_beta(
        state,
        mover,
        maximizer,
        i32::MIN,
        i32::MAX,
        &mut SearchStats::default(),
    )
}

/// Root precondition: the side to move must not have won already.
pub(crate) fn assert_searchable<S: GameState>(state: &S, mover: S::Player) {
    assert!(
        !state.has_won(mover),
        "{mover:?} to move in a position {mover:?} has already won"
    );
}

/// Score a position if the game is already decided.
fn terminal_score<S: GameState>(
    state: &S,
    mover: S::Player,
    maximizer: S::Player,
) -> Option<i32> {
    let other = mover.opponent();
    if state.has_won(other) {
        let magnitude = state.num_empty() as i32 + 1;
        return Some(if other == maximizer {
            magnitude
        } else {
            -magnitude
        });
    }
    if state.num_empty() == 0 {
        return Some(0);
    }
    None
}

pub(crate) fn minimax<S: GameState>(
    state: &mut S,
    mover: S::Player,
    maximizer: S::Player,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;
    if let Some(score) = terminal_score(state, mover, maximizer) {
        stats.leaves += 1;
        return SearchResult::terminal(score);
    }

    let maximizing = mover == maximizer;
    let mut best = SearchResult::worst_for(maximizing);

    for candidate in state.empty_cells() {
        state.place(candidate, mover);
        let child = minimax(state, mover.opponent(), maximizer, stats);
        state.clear(candidate);

        let child = child.at(candidate);
        if (maximizing && child.score > best.score) || (!maximizing && child.score < best.score) {
            best = child;
        }
    }

    best
}

/// Fail-soft alpha-beta with the same strict-improvement tie-break as
/// [`minimax`]. With a full window at the root this returns the first move
/// that achieves the true minimax score.
pub(crate) fn alpha_beta<S: GameState>(
    state: &mut S,
    mover: S::Player,
    maximizer: S::Player,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;
    if let Some(score) = terminal_score(state, mover, maximizer) {
        stats.leaves += 1;
        return SearchResult::terminal(score);
    }

    let maximizing = mover == maximizer;
    let mut best = SearchResult::worst_for(maximizing);

    for candidate in state.empty_cells() {
        state.place(candidate, mover);
        let child = alpha_beta(state, mover.opponent(), maximizer, alpha, beta, stats);
        state.clear(candidate);

        let child = child.at(candidate);
        if maximizing {
            if child.score > best.score {
                best = child;
            }
            alpha = alpha.max(best.score);
        } else {
            if child.score < best.score {
                best = child;
            }
            beta = beta.min(best.score);
        }

        if alpha >= beta {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Player};

    #[test]
    fn test_terminal_score_magnitude() {
        // X completed the top row with four cells still empty.
        let mut board = Board::from_string("XXX/OO./...").unwrap();
        let as_x = best_move(&mut board, Player::O, Player::X);
        assert_eq!(as_x, SearchResult::terminal(5));

        let as_o = best_move(&mut board, Player::O, Player::O);
        assert_eq!(as_o, SearchResult::terminal(-5));
    }

    #[test]
    fn test_win_on_last_cell_scores_one() {
        // XOX
        // OXO
        // OXX  <- X completed the diagonal with the final cell
        let mut board = Board::from_string("XOX/OXO/OXX").unwrap();
        let result = best_move(&mut board, Player::O, Player::X);
        assert_eq!(result, SearchResult::terminal(1));
    }

    #[test]
    fn test_full_board_draw() {
        let mut board = Board::from_string("XOX/XOO/OXX").unwrap();
        let result = best_move(&mut board, Player::X, Player::X);
        assert_eq!(result.position(), None);
        assert_eq!(result.score(), 0);
    }

    #[test]
    fn test_minimizing_root_takes_immediate_win() {
        // O to move, X maximizing: O still picks its own immediate win, which
        // is the minimum from X's point of view.
        let mut board = Board::from_string("XX./OO./X..").unwrap();
        let result = best_move(&mut board, Player::O, Player::X);
        assert_eq!(result, SearchResult::with_move(5, -4));
    }

    #[test]
    fn test_minimizing_ties_keep_lowest_index() {
        // Against a centre opening the four corner replies all draw (score 0)
        // while the edge replies lose; the minimizing O keeps corner 0.
        let mut board = Board::from_string(".../.X./...").unwrap();
        let result = best_move(&mut board, Player::O, Player::X);
        assert_eq!(result, SearchResult::with_move(0, 0));

        let pruned = best_move_alpha_beta(&mut board, Player::O, Player::X);
        assert_eq!(pruned, SearchResult::with_move(0, 0));
    }

    #[test]
    #[should_panic(expected = "has already won")]
    fn test_rejects_position_won_by_mover() {
        let mut board = Board::from_string("XXX/OO./...").unwrap();
        best_move(&mut board, Player::X, Player::X);
    }

    #[test]
    #[should_panic(expected = "has already won")]
    fn test_alpha_beta_rejects_position_won_by_mover() {
        let mut board = Board::from_string("XXX/OO./...").unwrap();
        best_move_alpha_beta(&mut board, Player::X, Player::O);
    }

    #[test]
    fn test_alpha_beta_visits_fewer_nodes() {
        let mut board = Board::from_string("X../.O./...").unwrap();
        let mut plain = SearchStats::default();
        let mut pruned = SearchStats::default();
        let a = minimax(&mut board, Player::X, Player::X, &mut plain);
        let b = alpha_beta(
            &mut board,
            Player::X,
            Player::X,
            i32::MIN,
            i32::MAX,
            &mut pruned,
        );
        assert_eq!(a, b);
        assert!(pruned.nodes < plain.nodes);
    }
}

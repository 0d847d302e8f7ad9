//! Common test utilities for the perfect_play test suite.
//!
//! Provides an exhaustive enumeration of reachable positions and an
//! independent win/draw/loss solver to check the engine against.

#![allow(dead_code)]

use std::collections::HashMap;

use perfect_play::tictactoe::{Board, Player};

/// Every non-terminal position reachable from the empty board with X moving
/// first, paired with the player to move.
pub fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen: HashMap<String, (Board, Player)> = HashMap::new();
    collect(Board::new(), Player::X, &mut seen);
    let mut positions: Vec<_> = seen.into_values().collect();
    positions.sort_by_key(|(board, _)| board.encode());
    positions
}

fn collect(board: Board, to_move: Player, seen: &mut HashMap<String, (Board, Player)>) {
    if board.is_terminal() || seen.contains_key(&board.encode()) {
        return;
    }
    seen.insert(board.encode(), (board, to_move));
    for pos in board.available_moves() {
        let mut next = board;
        next.make_move(pos, to_move).expect("empty cell");
        collect(next, to_move.opponent(), seen);
    }
}

/// Game-theoretic value (+1 win, 0 draw, -1 loss) for the player to move.
pub fn solve(board: &Board, to_move: Player, memo: &mut HashMap<String, i32>) -> i32 {
    let key = format!("{}_{}", board.encode(), to_move);
    if let Some(&value) = memo.get(&key) {
        return value;
    }

    let value = if board.has_won(to_move.opponent()) {
        -1
    } else if board.has_won(to_move) {
        1
    } else if !board.has_empty_squares() {
        0
    } else {
        board
            .available_moves()
            .into_iter()
            .map(|pos| {
                let mut next = *board;
                next.make_move(pos, to_move).expect("empty cell");
                -solve(&next, to_move.opponent(), memo)
            })
            .max()
            .unwrap_or(0)
    };

    memo.insert(key, value);
    value
}

//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owned_by(cells, line, target))
    }

    /// Check if a player owns a complete line passing through `pos`.
    ///
    /// Only lines containing the last placed cell can have been completed by
    /// that placement.
    pub fn wins_through(cells: &[Cell; 9], pos: usize, player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.contains(&pos))
            .any(|line| Self::line_owned_by(cells, line, target))
    }

    fn line_owned_by(cells: &[Cell; 9], line: &[usize; 3], target: Cell) -> bool {
        line.iter().all(|&idx| cells[idx] == target)
    }
}

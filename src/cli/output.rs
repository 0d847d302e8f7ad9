//! Output formatting for the CLI

use crate::tictactoe::{BOARD_SIZE, Board, Cell};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the board as framed rows, e.g. `| X | O |   |`.
pub fn render_board(board: &Board) -> String {
    board
        .cells()
        .chunks(3)
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|&cell| match cell {
                    Cell::Empty => " ".to_string(),
                    other => other.to_char().to_string(),
                })
                .collect();
            format!("| {} |", cells.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the cell numbering guide shown before a game.
pub fn render_index_guide() -> String {
    (0..BOARD_SIZE)
        .collect::<Vec<_>>()
        .chunks(3)
        .map(|row| {
            let cells: Vec<String> = row.iter().map(usize::to_string).collect();
            format!("| {} |", cells.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board() {
        let board = Board::from_string("X.O/.X./...").unwrap();
        assert_eq!(render_board(&board), "| X |   | O |\n|   | X |   |\n|   |   |   |");
    }

    #[test]
    fn test_render_index_guide() {
        assert_eq!(
            render_index_guide(),
            "| 0 | 1 | 2 |\n| 3 | 4 | 5 |\n| 6 | 7 | 8 |"
        );
    }
}

//! Board representation and the mutable game state the engine searches

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::ports::{GameState, Side};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a cell; `.`, `_` and `-` all mean empty.
    ///
    /// Whitespace is never a cell. [`Board::from_string`] skips it along with
    /// the `/` row separator.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// The mark printed for this player.
    pub fn mark(self) -> char {
        self.to_cell().to_char()
    }

    /// Parse `x`/`X`/`o`/`O`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPlayer`] for anything else.
    pub fn parse(token: &str) -> Result<Player, crate::Error> {
        match token.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayer {
                player: other.to_string(),
            }),
        }
    }
}

impl Side for Player {
    fn opponent(self) -> Self {
        Player::opponent(self)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Mutable 3x3 board shared by the game loop and the search engine.
///
/// Besides the cells the board caches the winner produced by the last
/// placement. Clearing a cell drops that cache, so a place/clear pair always
/// restores the board exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
    current_winner: Option<Player>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
            current_winner: None,
        }
    }

    /// Build a board from raw cells, deriving the cached winner.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InconsistentState`] if both players hold a
    /// winning line.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Result<Self, crate::Error> {
        let x_wins = LineAnalyzer::has_won(&cells, Player::X);
        let o_wins = LineAnalyzer::has_won(&cells, Player::O);
        let current_winner = match (x_wins, o_wins) {
            (true, true) => {
                return Err(crate::Error::InconsistentState {
                    message: "both players cannot have winning lines".to_string(),
                });
            }
            (true, false) => Some(Player::X),
            (false, true) => Some(Player::O),
            (false, false) => None,
        };
        Ok(Board {
            cells,
            current_winner,
        })
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace and `/` row separators are ignored; the remaining characters
    /// must be exactly nine cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfect_play::tictactoe::{Board, Cell};
    ///
    /// let board = Board::from_string("X.. / .O. / ..X")?;
    /// assert_eq!(board.get(4), Cell::O);
    /// assert_eq!(board.num_empty_squares(), 6);
    /// # Ok::<(), perfect_play::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board has other than 9 cell characters
    /// - Any character is not a valid cell representation
    /// - Both players hold a winning line
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Self::from_cells(cells)
    }

    /// Raw cells in index order.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Winner cached by the last placement, if any.
    pub fn current_winner(&self) -> Option<Player> {
        self.current_winner
    }

    /// Get all empty positions in ascending order
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether any cell is still empty.
    pub fn has_empty_squares(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Count empty cells.
    pub fn num_empty_squares(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Count occupied cells.
    pub fn occupied_count(&self) -> usize {
        BOARD_SIZE - self.num_empty_squares()
    }

    /// Place `player`'s mark at `pos`, updating the cached winner.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for indices past the board and
    /// [`crate::Error::InvalidMove`] for occupied cells.
    pub fn make_move(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= BOARD_SIZE {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        self.set(pos, player);
        Ok(())
    }

    /// Empty `pos` and forget the cached winner.
    pub fn undo_move(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
        self.current_winner = None;
    }

    fn set(&mut self, pos: usize, player: Player) {
        self.cells[pos] = player.to_cell();
        if LineAnalyzer::wins_through(&self.cells, pos, player) {
            self.current_winner = Some(player);
        }
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.has_empty_squares()
    }

    /// Whose turn it is under X-first alternation, judged from piece counts.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InconsistentState`] when the counts cannot
    /// arise from alternating play.
    pub fn inferred_to_move(&self) -> Result<Player, crate::Error> {
        let x = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o = self.cells.iter().filter(|&&c| c == Cell::O).count();
        if x == o {
            Ok(Player::X)
        } else if x == o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InconsistentState {
                message: format!("piece counts X={x}, O={o} cannot arise from X-first play"),
            })
        }
    }

    /// Get a compact string representation for use as a key
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Board {
    type Player = Player;

    fn empty_cells(&self) -> Vec<usize> {
        self.available_moves()
    }

    fn num_empty(&self) -> usize {
        self.num_empty_squares()
    }

    fn place(&mut self, position: usize, player: Player) {
        assert!(
            self.is_empty(position),
            "search placed a mark on occupied cell {position}"
        );
        self.set(position, player);
    }

    fn clear(&mut self, position: usize) {
        self.undo_move(position);
    }

    fn has_won(&self, player: Player) -> bool {
        Board::has_won(self, player)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board = Board::from_string("X.O/.X./O..").unwrap();
        assert_eq!(board.to_string(), "X.O\n.X.\nO..");
        assert_eq!(board.encode(), "X.O.X.O..");
        assert_eq!(board.available_moves(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("X.?......"),
            Err(crate::Error::InvalidCellCharacter { position: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XXX/OOO/..."),
            Err(crate::Error::InconsistentState { .. })
        ));
    }

    #[test]
    fn test_empty_cell_spellings_and_whitespace() {
        let dotted = Board::from_string("X../.O./..X").unwrap();
        assert_eq!(Board::from_string("X__/_O_/__X").unwrap(), dotted);
        assert_eq!(Board::from_string("X--/-O-/--X").unwrap(), dotted);
        assert_eq!(Board::from_string(" X . .\n. O .\n. . X ").unwrap(), dotted);

        // Spaces separate cells; they never stand for an empty one.
        assert!(matches!(
            Board::from_string("X  /.O./..X"),
            Err(crate::Error::InvalidBoardLength { got: 7, .. })
        ));
        assert_eq!(Cell::from_char(' '), None);
    }

    #[test]
    fn test_make_move_sets_winner() {
        let mut board = Board::from_string("XX./OO./...").unwrap();
        assert_eq!(board.current_winner(), None);
        board.make_move(5, Player::O).unwrap();
        assert_eq!(board.current_winner(), Some(Player::O));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_make_move_rejects_illegal_positions() {
        let mut board = Board::new();
        board.make_move(4, Player::X).unwrap();
        assert!(matches!(
            board.make_move(4, Player::O),
            Err(crate::Error::InvalidMove { position: 4 })
        ));
        assert!(matches!(
            board.make_move(9, Player::O),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_place_then_clear_restores_board() {
        let before = Board::from_string("XX./OO./...").unwrap();
        let mut board = before;
        GameState::place(&mut board, 2, Player::X);
        assert_eq!(board.current_winner(), Some(Player::X));
        GameState::clear(&mut board, 2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_inferred_to_move() {
        assert_eq!(Board::new().inferred_to_move().unwrap(), Player::X);
        let board = Board::from_string("X........").unwrap();
        assert_eq!(board.inferred_to_move().unwrap(), Player::O);
        let board = Board::from_string("XX.......").unwrap();
        assert!(board.inferred_to_move().is_err());
    }

    #[test]
    fn test_player_parse() {
        assert_eq!(Player::parse("x").unwrap(), Player::X);
        assert_eq!(Player::parse(" O ").unwrap(), Player::O);
        assert!(Player::parse("z").is_err());
    }
}

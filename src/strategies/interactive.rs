//! Interactive strategy - reads cell numbers from a line-oriented input

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, Player, board::BOARD_SIZE},
};

/// Strategy that asks a human for each move.
///
/// Non-numeric input, out-of-range cells and occupied cells are rejected with
/// a message and the prompt is repeated.
pub struct InteractiveStrategy<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveStrategy<R, W> {
    /// Create an interactive strategy over arbitrary input and output.
    pub fn new(name: String, input: R, output: W) -> Self {
        Self {
            name,
            input,
            output,
        }
    }

    /// Consume the strategy and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn parse_square(line: &str, board: &Board) -> Option<usize> {
        let square = line.trim().parse::<usize>().ok()?;
        (square < BOARD_SIZE && board.is_empty(square)).then_some(square)
    }
}

impl InteractiveStrategy<StdinLock<'static>, Stdout> {
    /// Interactive strategy on the process's stdin and stdout.
    pub fn stdio(name: String) -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(name, stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Strategy for InteractiveStrategy<R, W> {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        if board.is_terminal() {
            return Err(crate::Error::NoValidMoves);
        }

        loop {
            write!(self.output, "{player}'s turn. Input move (0-8): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(crate::Error::InputClosed);
            }

            match Self::parse_square(&line, board) {
                Some(square) => return Ok(square),
                None => writeln!(self.output, "Invalid square. Please try again.")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//! Play command - a human against the computer on the terminal

use anyhow::Result;
use clap::Parser;

use super::{build_strategy, parse_player_token};
use crate::{
    cli::{
        config::{PlayConfig, SearchConfig},
        output::{render_board, render_index_guide},
    },
    search::Pruning,
    strategies::{InteractiveStrategy, StrategyKind},
    tictactoe::{Game, GameOutcome, Move, Player, play_game},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// Mark you play (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub human: String,

    /// Computer strategy (`search` or `random`)
    #[arg(long, short = 'o', default_value = "search")]
    pub opponent: String,

    /// Who moves first (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search the empty board instead of opening on a random cell
    #[arg(long)]
    pub no_opening_shortcut: bool,

    /// Use alpha-beta pruning
    #[arg(long)]
    pub pruning: bool,
}

impl PlayArgs {
    fn to_config(&self) -> Result<PlayConfig> {
        Ok(PlayConfig {
            human: parse_player_token(&self.human, "--human")?,
            opponent: self.opponent.parse::<StrategyKind>()?,
            first: parse_player_token(&self.first, "--first")?,
            seed: self.seed,
            search: SearchConfig {
                pruning: if self.pruning {
                    Pruning::AlphaBeta
                } else {
                    Pruning::None
                },
                opening_shortcut: !self.no_opening_shortcut,
            },
        })
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.to_config()?;

    let mut human = InteractiveStrategy::stdio("Human".to_string());
    let mut computer = build_strategy(
        config.opponent,
        "Computer".to_string(),
        config.seed,
        config.search,
    );

    println!("{}", render_index_guide());
    println!();

    let show = |game: &Game, mv: Move| {
        println!("{} makes a move to square {}", mv.player, mv.position);
        println!("{}", render_board(game.board()));
        println!();
    };

    let game = match config.human {
        Player::X => play_game(&mut human, computer.as_mut(), config.first, show)?,
        Player::O => play_game(computer.as_mut(), &mut human, config.first, show)?,
    };

    match game.outcome() {
        Some(GameOutcome::Win(winner)) if winner == config.human => {
            println!("{winner} wins! You win!")
        }
        Some(GameOutcome::Win(winner)) => println!("{winner} wins!"),
        Some(GameOutcome::Draw) | None => println!("It's a tie!"),
    }

    Ok(())
}

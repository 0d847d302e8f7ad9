//! Solve command - best move and score for a single position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::parse_player_token;
use crate::{
    cli::output::{print_kv, print_section, render_board},
    search::{Pruning, SearchEngine, SearchResult, SearchStats},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Find the best move for a position")]
pub struct SolveArgs {
    /// Board as nine cells, rows optionally separated by `/` (e.g. `X../.O./..X`)
    pub board: String,

    /// Player to move (`x` or `o`); inferred from piece counts when omitted
    #[arg(long, short = 'm')]
    pub mover: Option<String>,

    /// Player whose advantage is optimised; defaults to the mover
    #[arg(long)]
    pub maximizer: Option<String>,

    /// Use alpha-beta pruning
    #[arg(long)]
    pub pruning: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SolveReport {
    board: String,
    mover: String,
    maximizer: String,
    result: SearchResult,
    stats: SearchStats,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let mut board = Board::from_string(&args.board)?;
    let mover = match &args.mover {
        Some(value) => parse_player_token(value, "--mover")?,
        None => board.inferred_to_move()?,
    };
    let maximizer = match &args.maximizer {
        Some(value) => parse_player_token(value, "--maximizer")?,
        None => mover,
    };
    if board.winner() == Some(mover) {
        return Err(crate::Error::GameOver.into());
    }
    let pruning = if args.pruning {
        Pruning::AlphaBeta
    } else {
        Pruning::None
    };

    let (result, stats) = SearchEngine::new(pruning).search(&mut board, mover, maximizer);

    if args.json {
        let report = SolveReport {
            board: board.encode(),
            mover: mover.to_string(),
            maximizer: maximizer.to_string(),
            result,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    println!("{}", render_board(&board));
    print_section("Search");
    print_kv("Mover", &mover.to_string());
    print_kv("Maximizer", &maximizer.to_string());
    print_kv("Pruning", &pruning.to_string());
    print_kv(
        "Best move",
        &result
            .position()
            .map_or_else(|| "none (terminal)".to_string(), |p| p.to_string()),
    );
    print_kv("Score", &result.score().to_string());
    print_kv("Nodes", &stats.nodes.to_string());
    print_kv("Leaves", &stats.leaves.to_string());

    Ok(())
}

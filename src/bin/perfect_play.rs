//! perfect_play CLI - play, solve and benchmark perfect Tic-Tac-Toe
//!
//! This CLI provides:
//! - Human versus computer games on the terminal
//! - Best move and score for any position
//! - Computer versus computer series

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "perfect_play")]
#[command(version, about = "Perfect-play Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(perfect_play::cli::commands::play::PlayArgs),

    /// Find the best move for a position
    Solve(perfect_play::cli::commands::solve::SolveArgs),

    /// Run a series between two computer strategies
    Match(perfect_play::cli::commands::versus::VersusArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    perfect_play::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => perfect_play::cli::commands::play::execute(args),
        Commands::Solve(args) => perfect_play::cli::commands::solve::execute(args),
        Commands::Match(args) => perfect_play::cli::commands::versus::execute(args),
    }
}

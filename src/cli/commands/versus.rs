//! Match command - computer against computer over a series of games

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{build_strategy, parse_player_token};
use crate::{
    cli::{
        config::{SearchConfig, VersusConfig},
        output::{print_kv, print_section},
    },
    pipeline::{MatchConfig, MatchRunner},
    search::Pruning,
    strategies::StrategyKind,
};

#[derive(Parser, Debug)]
#[command(about = "Run a series between two computer strategies")]
pub struct VersusArgs {
    /// Strategy playing X (`search` or `random`)
    #[arg(long, default_value = "search")]
    pub x: String,

    /// Strategy playing O (`search` or `random`)
    #[arg(long, default_value = "random")]
    pub o: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Who opens the first game (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: String,

    /// Alternate the opening player between games
    #[arg(long)]
    pub alternate: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use alpha-beta pruning
    #[arg(long)]
    pub pruning: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Export the summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl VersusArgs {
    fn to_config(&self) -> Result<VersusConfig> {
        Ok(VersusConfig {
            x: self.x.parse::<StrategyKind>()?,
            o: self.o.parse::<StrategyKind>()?,
            series: MatchConfig {
                games: self.games,
                first_player: parse_player_token(&self.first, "--first")?,
                alternate_first: self.alternate,
                progress: !self.quiet,
            },
            seed: self.seed,
            search: SearchConfig {
                pruning: if self.pruning {
                    Pruning::AlphaBeta
                } else {
                    Pruning::None
                },
                ..SearchConfig::default()
            },
        })
    }
}

pub fn execute(args: VersusArgs) -> Result<()> {
    let config = args.to_config()?;

    let mut x = build_strategy(config.x, format!("{:?}-X", config.x), config.seed, config.search);
    let mut o = build_strategy(
        config.o,
        format!("{:?}-O", config.o),
        config.seed.map(|s| s.wrapping_add(1)),
        config.search,
    );

    let runner = MatchRunner::new(config.series);
    let summary = runner.run(x.as_mut(), o.as_mut())?;

    print_section("Series Result");
    print_kv("X", &summary.x_name);
    print_kv("O", &summary.o_name);
    print_kv("Games", &summary.total_games.to_string());
    print_kv(
        "X wins",
        &format!("{} ({:.1}%)", summary.x_wins, summary.x_win_rate * 100.0),
    );
    print_kv(
        "O wins",
        &format!("{} ({:.1}%)", summary.o_wins, summary.o_win_rate * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", summary.draws, summary.draw_rate * 100.0),
    );

    if let Some(path) = &args.export {
        summary.save(path)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}

//! Head-to-head series between two strategies

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ports::Strategy,
    tictactoe::{GameOutcome, Player, play_game},
};

/// Series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Which player opens the first game
    pub first_player: Player,

    /// Swap the opening player after every game
    pub alternate_first: bool,

    /// Whether to draw a progress bar
    pub progress: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            first_player: Player::X,
            alternate_first: false,
            progress: false,
        }
    }
}

/// Result of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Name of the strategy playing X
    pub x_name: String,

    /// Name of the strategy playing O
    pub o_name: String,

    /// Total games played
    pub total_games: usize,

    /// Games won by X
    pub x_wins: usize,

    /// Games won by O
    pub o_wins: usize,

    /// Drawn games
    pub draws: usize,

    /// X win rate
    pub x_win_rate: f64,

    /// O win rate
    pub o_win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,
}

impl MatchSummary {
    /// Create a summary from raw tallies
    pub fn new(
        x_name: String,
        o_name: String,
        x_wins: usize,
        o_wins: usize,
        draws: usize,
    ) -> Self {
        let total_games = x_wins + o_wins + draws;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            x_name,
            o_name,
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save summary to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load summary from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let summary = serde_json::from_reader(file)?;
        Ok(summary)
    }
}

/// Plays a configured number of games between two strategies
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    /// Create a new runner
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Series configuration
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play the series with `x` always holding the X mark.
    ///
    /// # Errors
    ///
    /// Propagates the first strategy or move error.
    pub fn run(&self, x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<MatchSummary> {
        let progress = self.progress_bar()?;
        let mut first = self.config.first_player;
        let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);

        info!(
            x = x.name(),
            o = o.name(),
            games = self.config.games,
            "starting series"
        );

        for game_num in 0..self.config.games {
            let game = play_game(x, o, first, |_, _| {})?;
            match game.outcome() {
                Some(GameOutcome::Win(Player::X)) => x_wins += 1,
                Some(GameOutcome::Win(Player::O)) => o_wins += 1,
                Some(GameOutcome::Draw) | None => draws += 1,
            }
            debug!(
                game = game_num,
                first = %first,
                outcome = ?game.outcome(),
                moves = game.moves().len(),
                "game complete"
            );

            if let Some(pb) = &progress {
                pb.inc(1);
                pb.set_message(format!("X:{x_wins} O:{o_wins} D:{draws}"));
            }

            if self.config.alternate_first {
                first = first.opponent();
            }
        }

        if let Some(pb) = &progress {
            pb.finish_with_message(format!("X:{x_wins} O:{o_wins} D:{draws}"));
        }

        Ok(MatchSummary::new(
            x.name().to_string(),
            o.name().to_string(),
            x_wins,
            o_wins,
            draws,
        ))
    }

    fn progress_bar(&self) -> Result<Option<ProgressBar>> {
        if !self.config.progress {
            return Ok(None);
        }
        let pb = ProgressBar::new(self.config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        Ok(Some(pb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::RandomStrategy;

    #[test]
    fn test_series_counts_every_game() {
        let runner = MatchRunner::new(MatchConfig {
            games: 25,
            alternate_first: true,
            ..MatchConfig::default()
        });
        let mut x = RandomStrategy::with_seed("RandomX".to_string(), 1);
        let mut o = RandomStrategy::with_seed("RandomO".to_string(), 2);

        let summary = runner.run(&mut x, &mut o).unwrap();

        assert_eq!(summary.total_games, 25);
        assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 25);
        assert_eq!(summary.x_name, "RandomX");
        let rates = summary.x_win_rate + summary.o_win_rate + summary.draw_rate;
        assert!((rates - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_rates() {
        let summary = MatchSummary::new("A".to_string(), "B".to_string(), 0, 0, 0);
        assert_eq!(summary.total_games, 0);
        assert_eq!(summary.draw_rate, 0.0);
    }
}

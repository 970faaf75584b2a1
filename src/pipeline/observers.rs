//! Observer implementations for training pipelines
//!
//! Observers allow composable reporting during training without coupling
//! training logic to specific output formats.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Error, Result,
    pipeline::training::TrainingConfig,
    ports::Observer,
    tictactoe::{GameOutcome, Player},
};

/// Running outcome counts from X's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.ties += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.ties
    }
}

/// Progress bar observer - Shows training progress
#[derive(Default)]
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    tally: OutcomeTally,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn message(&self) -> String {
        format!(
            "X:{} O:{} T:{}",
            self.tally.x_wins, self.tally.o_wins, self.tally.ties
        )
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.tally.record(outcome);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Logs outcome counts through `tracing` every `interval` games
pub struct LoggingObserver {
    interval: usize,
    total_games: usize,
    tally: OutcomeTally,
}

impl LoggingObserver {
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            total_games: 0,
            tally: OutcomeTally::default(),
        }
    }

    /// Report at the config's `log_interval`
    pub fn from_config(config: &TrainingConfig) -> Self {
        Self::new(config.log_interval)
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    pub fn tally(&self) -> OutcomeTally {
        self.tally
    }
}

impl Observer for LoggingObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        self.total_games = total_games;
        info!(total_games, "training started");
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.tally.record(outcome);
        if game_num % self.interval == 0 {
            info!(
                game_num,
                total = self.total_games,
                x_wins = self.tally.x_wins,
                o_wins = self.tally.o_wins,
                ties = self.tally.ties,
                "training progress"
            );
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        info!(games = self.tally.total(), "training complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_observer_tallies() {
        let mut observer = LoggingObserver::new(2);
        observer.on_training_start(3).unwrap();
        observer.on_game_end(1, GameOutcome::Win(Player::X)).unwrap();
        observer.on_game_end(2, GameOutcome::Draw).unwrap();
        observer.on_game_end(3, GameOutcome::Win(Player::O)).unwrap();
        observer.on_training_end().unwrap();

        let tally = observer.tally();
        assert_eq!(tally.x_wins, 1);
        assert_eq!(tally.o_wins, 1);
        assert_eq!(tally.ties, 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_logging_observer_follows_config_interval() {
        let config = TrainingConfig::default().with_log_interval(250);
        assert_eq!(LoggingObserver::from_config(&config).interval(), 250);
        assert_eq!(
            LoggingObserver::from_config(&TrainingConfig::default()).interval(),
            100
        );
    }

    #[test]
    fn test_logging_observer_zero_interval() {
        let mut observer = LoggingObserver::new(0);
        assert!(observer.on_game_end(1, GameOutcome::Draw).is_ok());
    }

    #[test]
    fn test_progress_observer_lifecycle() {
        let mut observer = ProgressObserver::new();
        observer.on_training_start(2).unwrap();
        observer.on_game_end(1, GameOutcome::Draw).unwrap();
        observer.on_game_end(2, GameOutcome::Win(Player::X)).unwrap();
        observer.on_training_end().unwrap();
        assert_eq!(observer.message(), "X:1 O:0 T:1");
    }
}

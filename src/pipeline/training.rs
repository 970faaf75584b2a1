//! Self-play training for the Q-table

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Error, Result,
    pipeline::observers::OutcomeTally,
    ports::Observer,
    q_learning::QTable,
    tictactoe::{BoardState, Fingerprint, GameOutcome},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play games
    pub num_games: usize,

    /// Games between progress reports of a `LoggingObserver` built from
    /// this config
    pub log_interval: usize,
}

impl TrainingConfig {
    pub fn with_num_games(mut self, num_games: usize) -> Self {
        self.num_games = num_games;
        self
    }

    pub fn with_log_interval(mut self, log_interval: usize) -> Self {
        self.log_interval = log_interval;
        self
    }

    /// Check that the configuration can drive a training run
    pub fn validate(&self) -> Result<()> {
        if self.log_interval == 0 {
            return Err(Error::InvalidConfiguration {
                message: "log_interval must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 10_000,
            log_interval: 100,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,

    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,

    /// Distinct states in the table after training
    pub table_size: usize,
}

impl TrainingResult {
    fn rate(&self, count: usize) -> f64 {
        if self.total_games > 0 {
            count as f64 / self.total_games as f64
        } else {
            0.0
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn tie_rate(&self) -> f64 {
        self.rate(self.ties)
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}

/// One finished self-play game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfPlayGame {
    /// Fingerprint of every state reached after a move, in play order
    pub visited: Vec<Fingerprint>,
    pub outcome: GameOutcome,
}

/// Play one game with the table choosing moves for both sides.
///
/// The table is not updated with the result; see [`QTable::record_game`].
pub fn play_self_play_game(table: &mut QTable) -> Result<SelfPlayGame> {
    let mut state = BoardState::new();
    let mut visited = Vec::with_capacity(9);

    loop {
        if let Some(outcome) = state.outcome() {
            return Ok(SelfPlayGame { visited, outcome });
        }
        let player = state.turn_marker()?;
        let mv = table.select_move(&state, player)?;
        state = state.apply_move(mv)?;
        visited.push(state.fingerprint());
    }
}

/// Self-play training pipeline
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Play the configured number of games, recording each into `table`.
    pub fn run(&mut self, table: &mut QTable) -> Result<TrainingResult> {
        self.config.validate()?;

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_games)?;
        }

        let mut tally = OutcomeTally::default();
        for game_idx in 0..self.config.num_games {
            let game = play_self_play_game(table)?;
            table.record_game(&game.visited, game.outcome);
            tally.record(game.outcome);

            for observer in &mut self.observers {
                observer.on_game_end(game_idx + 1, game.outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult {
            total_games: tally.total(),
            x_wins: tally.x_wins,
            o_wins: tally.o_wins,
            ties: tally.ties,
            table_size: table.len(),
        };
        info!(
            games = result.total_games,
            x_wins = result.x_wins,
            o_wins = result.o_wins,
            ties = result.ties,
            states = result.table_size,
            "training finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use tempfile::TempDir;

    use super::*;
    use crate::tictactoe::Player;

    #[derive(Default)]
    struct Recorded {
        started: Option<usize>,
        games: Vec<usize>,
        ended: bool,
    }

    struct RecordingObserver(Rc<RefCell<Recorded>>);

    impl Observer for RecordingObserver {
        fn on_training_start(&mut self, total_games: usize) -> Result<()> {
            self.0.borrow_mut().started = Some(total_games);
            Ok(())
        }

        fn on_game_end(&mut self, game_num: usize, _outcome: GameOutcome) -> Result<()> {
            self.0.borrow_mut().games.push(game_num);
            Ok(())
        }

        fn on_training_end(&mut self) -> Result<()> {
            self.0.borrow_mut().ended = true;
            Ok(())
        }
    }

    #[test]
    fn test_self_play_game_visits_every_post_move_state() {
        let mut table = QTable::new();
        let game = play_self_play_game(&mut table).unwrap();

        assert!(game.visited.len() >= 5 && game.visited.len() <= 9);
        let last = game.visited.last().unwrap().to_state();
        assert_eq!(last.outcome(), Some(game.outcome));
        for (i, fp) in game.visited.iter().enumerate() {
            assert_eq!(fp.to_state().move_count(), i + 1);
        }
    }

    #[test]
    fn test_fresh_table_plays_first_candidates() {
        // All estimates are 0.0, so each side takes the first empty cell.
        let mut table = QTable::new();
        let game = play_self_play_game(&mut table).unwrap();
        assert_eq!(game.outcome, GameOutcome::Win(Player::X));
        assert_eq!(game.visited.len(), 7);
    }

    #[test]
    fn test_run_tallies_and_notifies() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let mut pipeline = TrainingPipeline::new(TrainingConfig::default().with_num_games(25))
            .with_observer(Box::new(RecordingObserver(Rc::clone(&recorded))));

        let mut table = QTable::new();
        let result = pipeline.run(&mut table).unwrap();

        assert_eq!(result.total_games, 25);
        assert_eq!(result.x_wins + result.o_wins + result.ties, 25);
        assert_eq!(result.table_size, table.len());

        let recorded = recorded.borrow();
        assert_eq!(recorded.started, Some(25));
        assert_eq!(recorded.games, (1..=25).collect::<Vec<_>>());
        assert!(recorded.ended);
    }

    #[test]
    fn test_zero_log_interval_rejected() {
        let config = TrainingConfig::default().with_log_interval(0);
        let mut pipeline = TrainingPipeline::new(config);
        let result = pipeline.run(&mut QTable::new());
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_result_json_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("result.json");

        let result = TrainingResult {
            total_games: 10,
            x_wins: 6,
            o_wins: 1,
            ties: 3,
            table_size: 40,
        };
        result.save(&path).unwrap();
        assert_eq!(TrainingResult::load(&path).unwrap(), result);
        assert!((result.x_win_rate() - 0.6).abs() < 1e-12);
        assert!((result.tie_rate() - 0.3).abs() < 1e-12);
    }
}

//! Observer port - hooks into self-play training
//!
//! Observers receive training events without the pipeline knowing how they
//! are reported (progress bars, logs, ...).

use crate::{Result, tictactoe::GameOutcome};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - Once at the beginning
/// 2. `on_game_end(game_num, outcome)` - After each game has been recorded
/// 3. `on_training_end()` - Once at the end
pub trait Observer {
    /// Called when training starts.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a game is recorded in the table.
    ///
    /// `game_num` is 1-based: it equals the number of games played so far.
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}

//! Game outcomes and recorded games

use serde::{Deserialize, Serialize};

use super::{
    board::{BoardState, Player},
    moves::Move,
};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Game-theoretic value from X's perspective: X win +1, draw 0, O win -1
    pub fn score(self) -> i8 {
        match self {
            GameOutcome::Win(Player::X) => 1,
            GameOutcome::Win(Player::O) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

/// A complete game with its move history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Board after each move, starting from the empty board (excluded)
    ///
    /// # Errors
    ///
    /// Returns error if any recorded move is illegal, which indicates corrupted
    /// game data.
    pub fn state_sequence(&self) -> Result<Vec<BoardState>, crate::Error> {
        let mut state = BoardState::new();
        let mut states = Vec::with_capacity(self.moves.len());
        for &mv in &self.moves {
            state = state.apply_move(mv)?;
            states.push(state);
        }
        Ok(states)
    }
}

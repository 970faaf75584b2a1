//! Agent variants behind the [`Agent`] port
//!
//! - [`MinimaxAgent`]: perfect play from a solved tree
//! - [`QTableAgent`]: greedy play from a trained Q-table
//! - [`RandomAgent`]: uniform baseline

use std::sync::Arc;

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    minimax::MinimaxEvaluator,
    ports::Agent,
    q_learning::QTable,
    tictactoe::{BoardState, Move},
};

/// Plays the evaluator's best move.
///
/// The evaluator is shared so both sides of a match can use one solved tree.
pub struct MinimaxAgent {
    name: String,
    evaluator: Arc<MinimaxEvaluator>,
}

impl MinimaxAgent {
    pub fn new(name: impl Into<String>, evaluator: Arc<MinimaxEvaluator>) -> Self {
        Self {
            name: name.into(),
            evaluator,
        }
    }

    pub fn evaluator(&self) -> &MinimaxEvaluator {
        &self.evaluator
    }
}

impl Agent for MinimaxAgent {
    fn propose_move(&mut self, state: &BoardState) -> Result<Move> {
        self.evaluator.best_move(state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Greedy Q-table player for whichever side is to move
pub struct QTableAgent {
    name: String,
    table: QTable,
}

impl QTableAgent {
    pub fn new(name: impl Into<String>, table: QTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn into_table(self) -> QTable {
        self.table
    }
}

impl Agent for QTableAgent {
    fn propose_move(&mut self, state: &BoardState) -> Result<Move> {
        let player = state.turn_marker()?;
        self.table.select_move(state, player)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn propose_move(&mut self, state: &BoardState) -> Result<Move> {
        let moves: Vec<Move> = state
            .successor_states()?
            .into_iter()
            .map(|(mv, _)| mv)
            .collect();
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| Error::NoLegalMoves {
                state: state.fingerprint().to_string(),
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_minimax_agent_plays_best_move() {
        let evaluator = Arc::new(MinimaxEvaluator::from_empty_board().unwrap());
        let mut agent = MinimaxAgent::new("minimax", Arc::clone(&evaluator));

        let state = BoardState::from_string("XX.OO....").unwrap();
        assert_eq!(agent.propose_move(&state).unwrap(), Move::new(0, 2));
        assert_eq!(agent.name(), "minimax");
    }

    #[test]
    fn test_q_table_agent_uses_side_to_move() {
        let mut table = QTable::new();
        table.record_game(
            &["X.......O".parse().unwrap()],
            crate::tictactoe::GameOutcome::Win(Player::O),
        );
        let mut agent = QTableAgent::new("q", table);

        let state = BoardState::from_string("X........").unwrap();
        // O minimizes, so the only negatively valued reply is chosen
        assert_eq!(agent.propose_move(&state).unwrap(), Move::new(2, 2));
        assert_eq!(agent.table().len(), 8);
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let state = BoardState::new();
        let mut a = RandomAgent::with_seed("a", 7);
        let mut b = RandomAgent::with_seed("b", 7);
        for _ in 0..5 {
            assert_eq!(
                a.propose_move(&state).unwrap(),
                b.propose_move(&state).unwrap()
            );
        }
    }

    #[test]
    fn test_random_agent_on_terminal_state() {
        let mut agent = RandomAgent::with_seed("r", 1);
        let won = BoardState::from_string("XXXOO....").unwrap();
        assert!(matches!(
            agent.propose_move(&won),
            Err(Error::NoLegalMoves { .. })
        ));
    }
}

//! Head-to-head games between two agents

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    pipeline::observers::OutcomeTally,
    ports::Agent,
    tictactoe::{BoardState, GameRecord, Player},
};

/// Tally of a series of games with fixed sides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub x_name: String,
    pub o_name: String,
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
}

/// Play one game from the empty board, `x` moving first.
pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent) -> Result<GameRecord> {
    let mut state = BoardState::new();
    let mut moves = Vec::with_capacity(9);

    let outcome = loop {
        if let Some(outcome) = state.outcome() {
            break outcome;
        }
        let mv = match state.turn_marker()? {
            Player::X => x.propose_move(&state)?,
            Player::O => o.propose_move(&state)?,
        };
        state = state.apply_move(mv)?;
        moves.push(mv);
    };

    debug!(x = x.name(), o = o.name(), ?outcome, moves = moves.len(), "game finished");
    Ok(GameRecord { moves, outcome })
}

/// Play `games` games with the same seating.
pub fn play_match(x: &mut dyn Agent, o: &mut dyn Agent, games: usize) -> Result<MatchResult> {
    let mut tally = OutcomeTally::default();
    for _ in 0..games {
        let record = play_game(x, o)?;
        tally.record(record.outcome);
    }
    Ok(MatchResult {
        x_name: x.name().to_string(),
        o_name: o.name().to_string(),
        games: tally.total(),
        x_wins: tally.x_wins,
        o_wins: tally.o_wins,
        ties: tally.ties,
    })
}

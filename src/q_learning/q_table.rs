//! State-value table trained by incremental mean outcome estimation

use std::collections::HashMap;

use tracing::trace;

use crate::{
    Error, Result,
    tictactoe::{BoardState, Fingerprint, GameOutcome, Move, Player},
};

/// Scalar reward credited to every visited state for each outcome.
///
/// Rewards are from X's perspective, matching the minimax sign convention.
/// All three values are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardScheme {
    x_win: f64,
    o_win: f64,
    tie: f64,
}

impl RewardScheme {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if any reward is NaN or infinite.
    pub fn new(x_win: f64, o_win: f64, tie: f64) -> Result<Self> {
        for (name, value) in [("x_win", x_win), ("o_win", o_win), ("tie", tie)] {
            if !value.is_finite() {
                return Err(Error::InvalidConfiguration {
                    message: format!("reward {name} must be finite, got {value}"),
                });
            }
        }
        Ok(Self { x_win, o_win, tie })
    }

    pub fn x_win(&self) -> f64 {
        self.x_win
    }

    pub fn o_win(&self) -> f64 {
        self.o_win
    }

    pub fn tie(&self) -> f64 {
        self.tie
    }

    pub fn reward(&self, outcome: GameOutcome) -> f64 {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_win,
            GameOutcome::Win(Player::O) => self.o_win,
            GameOutcome::Draw => self.tie,
        }
    }
}

impl Default for RewardScheme {
    /// X win +1, O win -1, tie 0
    fn default() -> Self {
        Self {
            x_win: 1.0,
            o_win: -1.0,
            tie: 0.0,
        }
    }
}

/// Visit statistics for one state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QEntry {
    pub visits: u64,
    pub mean_value: f64,
}

impl QEntry {
    /// Fold one more observed reward into the running mean
    fn observe(&mut self, reward: f64) {
        let n = self.visits as f64;
        self.mean_value = self.mean_value * (n / (n + 1.0)) + reward / (n + 1.0);
        self.visits += 1;
    }
}

/// Q-table keyed by state fingerprint.
///
/// Unseen states enter with zero visits and a neutral mean of 0.0 the first
/// time they are offered as a candidate.
#[derive(Debug, Clone, Default)]
pub struct QTable {
    entries: HashMap<Fingerprint, QEntry>,
    rewards: RewardScheme,
}

impl QTable {
    /// Create an empty table with the default reward scheme
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with explicit rewards
    pub fn with_rewards(rewards: RewardScheme) -> Self {
        Self {
            entries: HashMap::new(),
            rewards,
        }
    }

    pub(crate) fn from_entries(entries: HashMap<Fingerprint, QEntry>, rewards: RewardScheme) -> Self {
        Self { entries, rewards }
    }

    pub fn rewards(&self) -> RewardScheme {
        self.rewards
    }

    pub fn entry(&self, state: &Fingerprint) -> Option<&QEntry> {
        self.entries.get(state)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&Fingerprint, &QEntry)> {
        self.entries.iter()
    }

    /// Number of states in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick the successor with the best current estimate for `acting_player`.
    ///
    /// X takes the highest mean value, O the lowest. Candidates are scanned in
    /// row-major move order and the first extremal one wins ties. Missing
    /// candidate entries are inserted before comparison.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] if `state` is terminal or full, and
    /// [`Error::InvalidState`] if it is malformed.
    pub fn select_move(&mut self, state: &BoardState, acting_player: Player) -> Result<Move> {
        let maximizing = acting_player.is_maximizing();
        let mut best: Option<(Move, f64)> = None;

        for (mv, next) in state.successor_states()? {
            let value = self.entries.entry(next.fingerprint()).or_default().mean_value;
            let better = match best {
                None => true,
                Some((_, current)) if maximizing => value > current,
                Some((_, current)) => value < current,
            };
            if better {
                best = Some((mv, value));
            }
        }

        let (mv, value) = best.ok_or_else(|| Error::NoLegalMoves {
            state: state.fingerprint().to_string(),
        })?;
        trace!(state = %state.fingerprint(), %mv, value, "selected move");
        Ok(mv)
    }

    /// Credit the outcome of one finished game to every state it visited.
    ///
    /// Each occurrence in `visited` is one update: `visits` grows by one and
    /// the mean moves toward the outcome reward. The same reward is applied
    /// to every state regardless of which side was to move there and how far
    /// from the end it occurred.
    pub fn record_game(&mut self, visited: &[Fingerprint], outcome: GameOutcome) {
        let reward = self.rewards.reward(outcome);
        for state in visited {
            self.entries.entry(*state).or_default().observe(reward);
        }
        trace!(states = visited.len(), ?outcome, reward, "recorded game");
    }
}

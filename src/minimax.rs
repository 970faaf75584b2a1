//! Exhaustive memoized minimax over the tic-tac-toe game tree
//!
//! The evaluator walks every state reachable from its root exactly once and
//! stores the game-theoretic value of each under its [`Fingerprint`]. Values are
//! from X's perspective (see [`GameOutcome::score`]): X maximizes, O minimizes.
//! After construction the memo table is read-only; move queries only look
//! values up and never recompute.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{BoardState, Fingerprint, GameOutcome, Move, Player},
};

/// Fully solved game tree below a root state
#[derive(Debug, Clone)]
pub struct MinimaxEvaluator {
    root: BoardState,
    memo: HashMap<Fingerprint, i8>,
}

impl MinimaxEvaluator {
    /// Solve every state reachable from `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `root` is malformed.
    pub fn new(root: BoardState) -> Result<Self> {
        root.turn_marker()?;

        let mut evaluator = Self {
            root,
            memo: HashMap::new(),
        };
        let value = evaluator.evaluate(root)?;
        debug!(
            root = %root.fingerprint(),
            value,
            states = evaluator.memo.len(),
            "minimax tree solved"
        );
        Ok(evaluator)
    }

    /// Solve the whole game from the empty board
    pub fn from_empty_board() -> Result<Self> {
        Self::new(BoardState::new())
    }

    fn evaluate(&mut self, state: BoardState) -> Result<i8> {
        let key = state.fingerprint();
        if let Some(&value) = self.memo.get(&key) {
            return Ok(value);
        }

        let value = match state.outcome() {
            Some(outcome) => outcome.score(),
            None => {
                let maximizing = state.turn_marker()?.is_maximizing();
                let mut best = if maximizing { i8::MIN } else { i8::MAX };
                for (_, next) in state.successor_states()? {
                    let child = self.evaluate(next)?;
                    best = if maximizing {
                        best.max(child)
                    } else {
                        best.min(child)
                    };
                }
                best
            }
        };

        self.memo.insert(key, value);
        Ok(value)
    }

    /// State the tree was solved from
    pub fn root(&self) -> BoardState {
        self.root
    }

    /// Number of memoized states
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Memoized value of `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMemoizedValue`] if `state` is not reachable from the root.
    pub fn value(&self, state: &BoardState) -> Result<i8> {
        let key = state.fingerprint();
        self.memo
            .get(&key)
            .copied()
            .ok_or_else(|| Error::NoMemoizedValue {
                state: key.to_string(),
            })
    }

    /// Optimal move for the side to move.
    ///
    /// Among equally valued moves the first in row-major order wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] for terminal states and
    /// [`Error::NoMemoizedValue`] if a successor was never evaluated.
    pub fn best_move(&self, state: &BoardState) -> Result<Move> {
        let maximizing = state.turn_marker()?.is_maximizing();
        let mut best: Option<(Move, i8)> = None;

        for (mv, next) in state.successor_states()? {
            let value = self.value(&next)?;
            let better = match best {
                None => true,
                Some((_, current)) if maximizing => value > current,
                Some((_, current)) => value < current,
            };
            if better {
                best = Some((mv, value));
            }
        }

        best.map(|(mv, _)| mv).ok_or_else(|| Error::NoLegalMoves {
            state: state.fingerprint().to_string(),
        })
    }

    /// Moves played when both sides follow [`best_move`](Self::best_move) from
    /// `state` until the game ends.
    pub fn principal_variation(&self, state: &BoardState) -> Result<Vec<Move>> {
        let mut line = Vec::new();
        let mut current = *state;
        while !current.is_terminal() {
            let mv = self.best_move(&current)?;
            current = current.apply_move(mv)?;
            line.push(mv);
        }
        Ok(line)
    }

    /// Outcome of optimal play from `state`
    pub fn predicted_outcome(&self, state: &BoardState) -> Result<GameOutcome> {
        Ok(match self.value(state)? {
            v if v > 0 => GameOutcome::Win(Player::X),
            v if v < 0 => GameOutcome::Win(Player::O),
            _ => GameOutcome::Draw,
        })
    }

    /// Fold another evaluator's memo table into this one.
    ///
    /// Entries present in both tables must agree: a consistent game has exactly
    /// one value per state. On conflict nothing is merged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingMemoEntry`] for the first disagreeing state.
    pub fn merge(&mut self, other: &MinimaxEvaluator) -> Result<()> {
        for (key, &incoming) in &other.memo {
            match self.memo.get(key) {
                Some(&existing) if existing != incoming => {
                    return Err(Error::ConflictingMemoEntry {
                        state: key.to_string(),
                        existing,
                        incoming,
                    });
                }
                _ => {}
            }
        }

        let before = self.memo.len();
        self.memo.extend(other.memo.iter().map(|(&k, &v)| (k, v)));
        debug!(added = self.memo.len() - before, "merged minimax shard");
        Ok(())
    }
}

//! Agent port - abstraction over move-proposing players
//!
//! The game loop and match runner only depend on this trait. Variants
//! (minimax, Q-table, random baseline) live in [`crate::agents`].

use crate::{
    Result,
    tictactoe::{BoardState, Move},
};

/// A player that proposes moves.
///
/// # Examples
///
/// ```
/// use oxo::{
///     ports::Agent,
///     tictactoe::{BoardState, Move},
/// };
///
/// struct FirstFree;
///
/// impl Agent for FirstFree {
///     fn propose_move(&mut self, state: &BoardState) -> oxo::Result<Move> {
///         state
///             .legal_moves()
///             .first()
///             .copied()
///             .ok_or_else(|| oxo::Error::NoLegalMoves {
///                 state: state.fingerprint().to_string(),
///             })
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// let mut agent = FirstFree;
/// assert_eq!(agent.propose_move(&BoardState::new())?, Move::new(0, 0));
/// # Ok::<(), oxo::Error>(())
/// ```
pub trait Agent {
    /// Choose a move for the side to move in `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move exists or the agent cannot evaluate
    /// the state.
    fn propose_move(&mut self, state: &BoardState) -> Result<Move>;

    /// Name used in logs and match reports
    fn name(&self) -> &str;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn propose_move(&mut self, state: &BoardState) -> Result<Move> {
        (**self).propose_move(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

//! Tabular self-play learning
//!
//! The [`QTable`] maps state fingerprints to a visit count and the running
//! mean of the final rewards of the games that passed through the state.
//!
//! ## Update rule
//!
//! After each finished game every visited state receives the same reward
//! (see [`RewardScheme`]):
//!
//! ```text
//! mean ← mean · n/(n+1) + reward/(n+1),   n ← n + 1
//! ```
//!
//! There is no discounting by distance from the end of the game.
//!
//! ## Usage Example
//!
//! ```
//! use oxo::q_learning::QTable;
//! use oxo::tictactoe::{BoardState, GameOutcome, Player};
//!
//! let mut table = QTable::new();
//! let board = BoardState::new();
//! let mv = table.select_move(&board, Player::X)?;
//! let next = board.apply_move(mv)?;
//! table.record_game(&[next.fingerprint()], GameOutcome::Win(Player::X));
//! assert_eq!(table.entry(&next.fingerprint()).unwrap().mean_value, 1.0);
//! # Ok::<(), oxo::Error>(())
//! ```

pub mod q_table;
pub mod snapshot;

pub use q_table::{QEntry, QTable, RewardScheme};
pub use snapshot::QRecord;

//! Tic-Tac-Toe game implementation

pub mod board;
pub mod enumerate;
pub mod fingerprint;
pub mod game;
pub mod lines;
pub mod moves;

pub use board::{BoardState, Cell, Player};
pub use enumerate::reachable_states;
pub use fingerprint::Fingerprint;
pub use game::{GameOutcome, GameRecord};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use moves::Move;

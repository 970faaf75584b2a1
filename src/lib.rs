//! oxo: tic-tac-toe solved by minimax and learned by a Q-table
//!
//! This crate provides:
//! - Tic-tac-toe rules with validated moves and terminal detection
//! - An exhaustive memoized minimax evaluator
//! - A state-value Q-table trained by self-play
//! - Agents, matches and CSV persistence built on small port traits

pub mod adapters;
pub mod agents;
pub mod cli;
pub mod error;
pub mod minimax;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod tictactoe;

pub use error::{Error, Result};
pub use minimax::MinimaxEvaluator;
pub use q_learning::QTable;

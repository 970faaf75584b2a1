//! CLI infrastructure for the `oxo` binary
//!
//! Commands for training a Q-table, solving positions with minimax and
//! playing agents against each other.

pub mod commands;
pub mod output;

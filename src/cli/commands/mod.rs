//! Subcommands of the `oxo` binary

pub mod arena;
pub mod solve;
pub mod train;

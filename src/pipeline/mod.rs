//! Training and evaluation pipelines
//!
//! This module provides:
//! - Self-play training of a Q-table
//! - Head-to-head matches between agents
//! - Observers for reporting training progress

pub mod arena;
pub mod observers;
pub mod training;

pub use arena::{MatchResult, play_game, play_match};
pub use observers::{LoggingObserver, OutcomeTally, ProgressObserver};
pub use training::{
    SelfPlayGame, TrainingConfig, TrainingPipeline, TrainingResult, play_self_play_game,
};

pub use crate::ports::{Agent, Observer};

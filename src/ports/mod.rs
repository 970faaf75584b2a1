//! Ports (trait boundaries) for external collaborators.
//!
//! These traits are owned by the core and implemented by agents, observers
//! and storage adapters.

pub mod agent;
pub mod observer;
pub mod repository;

pub use agent::Agent;
pub use observer::Observer;
pub use repository::QTableRepository;

//! Repository port for Q-table persistence.
//!
//! Repositories store and restore [`QTable`] snapshots; the table itself knows
//! nothing about files.

use std::path::Path;

use crate::{
    Result,
    q_learning::{QTable, RewardScheme},
};

/// Port for persisting and loading trained Q-tables.
///
/// # Examples
///
/// ```no_run
/// use oxo::ports::QTableRepository;
/// use oxo::q_learning::QTable;
/// use std::path::Path;
///
/// fn save_table<R: QTableRepository>(repo: &R, table: &QTable) -> oxo::Result<()> {
///     repo.save(table, Path::new("q_table.csv"))
/// }
/// ```
pub trait QTableRepository {
    /// Save the table's snapshot records.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization fails.
    fn save(&self, table: &QTable, path: &Path) -> Result<()>;

    /// Load a table, attaching the given reward scheme.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, is malformed, or contains
    /// duplicate states.
    fn load(&self, path: &Path, rewards: RewardScheme) -> Result<QTable>;
}

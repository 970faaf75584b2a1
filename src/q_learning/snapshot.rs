//! Flat export of a Q-table
//!
//! A snapshot is a list of `(state, visits, mean_value)` records sorted by
//! state fingerprint. It carries no format of its own; adapters decide how the
//! records are stored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::q_table::{QEntry, QTable, RewardScheme};
use crate::{Error, Result, tictactoe::Fingerprint};

/// One exported table row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QRecord {
    pub state: Fingerprint,
    pub visits: u64,
    pub mean_value: f64,
}

impl QTable {
    /// Export every entry, sorted by fingerprint
    pub fn snapshot(&self) -> Vec<QRecord> {
        let mut records: Vec<QRecord> = self
            .entries()
            .map(|(&state, entry)| QRecord {
                state,
                visits: entry.visits,
                mean_value: entry.mean_value,
            })
            .collect();
        records.sort_by_key(|record| record.state);
        records
    }

    /// Rebuild a table from exported records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if a state appears twice or a
    /// mean value is not finite.
    pub fn from_records<I>(records: I, rewards: RewardScheme) -> Result<Self>
    where
        I: IntoIterator<Item = QRecord>,
    {
        let mut entries = HashMap::new();
        for record in records {
            if !record.mean_value.is_finite() {
                return Err(Error::InvalidConfiguration {
                    message: format!(
                        "mean value {} for state '{}' is not finite",
                        record.mean_value, record.state
                    ),
                });
            }
            let entry = QEntry {
                visits: record.visits,
                mean_value: record.mean_value,
            };
            if entries.insert(record.state, entry).is_some() {
                return Err(Error::InvalidConfiguration {
                    message: format!("state '{}' appears more than once", record.state),
                });
            }
        }
        Ok(QTable::from_entries(entries, rewards))
    }
}

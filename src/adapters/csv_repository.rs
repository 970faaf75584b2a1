//! CSV implementation of the Q-table repository.
//!
//! One row per [`QRecord`] under the header `state,visits,mean_value`.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{
    Result,
    error::Error,
    ports::QTableRepository,
    q_learning::{QRecord, QTable, RewardScheme},
};

/// CSV-based Q-table repository.
///
/// # Examples
///
/// ```no_run
/// use oxo::adapters::CsvRepository;
/// use oxo::ports::QTableRepository;
/// use oxo::q_learning::{QTable, RewardScheme};
/// use std::path::Path;
///
/// let repo = CsvRepository::new();
/// repo.save(&QTable::new(), Path::new("q_table.csv"))?;
/// let table = repo.load(Path::new("q_table.csv"), RewardScheme::default())?;
/// # Ok::<(), oxo::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRepository;

impl CsvRepository {
    pub fn new() -> Self {
        Self
    }
}

impl QTableRepository for CsvRepository {
    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        let mut writer = csv::Writer::from_writer(BufWriter::new(file));
        for record in table.snapshot() {
            writer.serialize(record)?;
        }
        writer.flush().map_err(|source| Error::Io {
            operation: format!("write file {path:?}"),
            source,
        })?;
        Ok(())
    }

    fn load(&self, path: &Path, rewards: RewardScheme) -> Result<QTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(BufReader::new(file));
        let records = reader
            .deserialize::<QRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        QTable::from_records(records, rewards)
    }
}

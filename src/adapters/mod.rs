//! Storage adapters implementing the repository port.

pub mod csv_repository;

pub use csv_repository::CsvRepository;

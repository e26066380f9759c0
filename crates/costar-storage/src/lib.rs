//! Costar Storage - dataset loading for the co-star graph
//!
//! Reads the `people.csv`, `movies.csv` and `stars.csv` files of a dataset
//! directory into an in-memory [`costar_core::Dataset`].

pub mod error;
pub mod loader;

pub use error::{StorageError, StorageResult};
pub use loader::{CsvLoader, LoadReport, MOVIES_FILE, PEOPLE_FILE, STARS_FILE};

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use config::LedgerConfig;
pub use error::LedgerError;
pub use input::EntryInput;
pub use model::data_point::{seed_series, DataPoint};
pub use model::summary::{Summary, HOURLY_COST, RUNS_PER_MONTH};
pub use repository::{
    DetachedStore, FileKeyValueStore, InMemoryStore, KeyValueStore, SeriesRepository,
    StoreSeriesRepository, STORAGE_KEY,
};
pub use service::export::{export_series, parse_export, EXPORT_FILE_NAME};
pub use service::ledger::Ledger;

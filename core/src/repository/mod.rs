pub mod file;
pub mod memory;
pub mod series;
pub mod traits;

// Re-export
pub use file::FileKeyValueStore;
pub use memory::{DetachedStore, InMemoryStore};
pub use series::{StoreSeriesRepository, STORAGE_KEY};
pub use traits::{KeyValueStore, SeriesRepository};

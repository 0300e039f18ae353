use anyhow::Result;
use tracing::debug;

use crate::error::LedgerError;
use crate::model::data_point::DataPoint;
use crate::repository::traits::{KeyValueStore, SeriesRepository};

/// Key the series has always been stored under.
pub const STORAGE_KEY: &str = "testingData";

/// Stores the series as one JSON array under a single key.
pub struct StoreSeriesRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StoreSeriesRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> SeriesRepository for StoreSeriesRepository<S> {
    fn load(&self) -> Result<Option<Vec<DataPoint>>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let series: Vec<DataPoint> =
            serde_json::from_str(&raw).map_err(LedgerError::MalformedSeries)?;
        debug!(key = %self.key, points = series.len(), "loaded series");
        Ok(Some(series))
    }

    fn save(&self, series: &[DataPoint]) -> Result<()> {
        let raw = serde_json::to_string(series)?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, points = series.len(), "saved series");
        Ok(())
    }
}

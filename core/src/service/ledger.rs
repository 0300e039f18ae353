use tracing::{debug, info, warn};

use crate::error::Result;
use crate::input::EntryInput;
use crate::model::data_point::{seed_series, DataPoint};
use crate::model::summary::Summary;
use crate::repository::SeriesRepository;
use crate::service::export::export_series;
use crate::time::current_month_label;

/// The ordered ROI series plus the repository it is mirrored to.
///
/// The series only grows through [`Ledger::record_entry`]. Every append
/// rewrites the whole persisted copy; a failed write is logged and the
/// in-memory series stays authoritative for the rest of the session.
pub struct Ledger<R: SeriesRepository> {
    repo: R,
    series: Vec<DataPoint>,
}

impl<R: SeriesRepository> Ledger<R> {
    /// Loads the persisted series, falling back to the seed when nothing is
    /// stored, the store cannot be read, or the stored value is malformed.
    pub fn initialize(repo: R) -> Self {
        let series = match repo.load() {
            Ok(Some(series)) => {
                debug!(points = series.len(), "restored series");
                series
            }
            Ok(None) => {
                debug!("no stored series, using seed");
                seed_series()
            }
            Err(e) => {
                warn!(error = %e, "could not restore series, using seed");
                seed_series()
            }
        };
        Self { repo, series }
    }

    pub fn series(&self) -> &[DataPoint] {
        &self.series
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Appends a point for the current calendar month.
    pub fn record_entry(&mut self, input: EntryInput) -> &DataPoint {
        self.record_entry_for(current_month_label(), input)
    }

    pub fn record_entry_for(&mut self, month: impl Into<String>, input: EntryInput) -> &DataPoint {
        let hours_saved = input.hours_saved();
        let point = DataPoint::new(month, input.automated_tests(), hours_saved);
        info!(month = %point.month, tests = point.tests, hours_saved, "recorded entry");

        self.series.push(point);
        self.persist();

        &self.series[self.series.len() - 1]
    }

    /// Validates the raw form fields and records them.
    pub fn submit(&mut self, tests: &str, hours_per_test: &str) -> Result<&DataPoint> {
        let input = EntryInput::parse(tests, hours_per_test)?;
        Ok(self.record_entry(input))
    }

    pub fn derive_summary(&self) -> Summary {
        Summary::derive(&self.series)
    }

    pub fn export_series(&self) -> Result<Vec<u8>> {
        export_series(&self.series)
    }

    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.series) {
            warn!(error = %e, points = self.series.len(), "could not persist series");
        }
    }
}

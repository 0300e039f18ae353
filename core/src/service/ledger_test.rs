#[cfg(test)]
mod tests {
    use crate::error::LedgerError;
    use crate::input::EntryInput;
    use crate::model::data_point::{seed_series, DataPoint};
    use crate::model::summary::Summary;
    use crate::repository::{
        DetachedStore, FileKeyValueStore, InMemoryStore, KeyValueStore, SeriesRepository,
        StoreSeriesRepository, STORAGE_KEY,
    };
    use crate::service::export::parse_export;
    use crate::service::ledger::Ledger;
    use anyhow::{anyhow, Result};
    use std::cell::{Cell, RefCell};
    use tempfile::TempDir;

    /// Repository whose reads and writes can be made to fail.
    #[derive(Default)]
    struct MockRepo {
        stored: RefCell<Option<Vec<DataPoint>>>,
        fail_load: bool,
        fail_save: bool,
        saves: Cell<usize>,
    }

    impl SeriesRepository for MockRepo {
        fn load(&self) -> Result<Option<Vec<DataPoint>>> {
            if self.fail_load {
                return Err(anyhow!("store unavailable"));
            }
            Ok(self.stored.borrow().clone())
        }

        fn save(&self, series: &[DataPoint]) -> Result<()> {
            self.saves.set(self.saves.get() + 1);
            if self.fail_save {
                return Err(anyhow!("quota exceeded"));
            }
            *self.stored.borrow_mut() = Some(series.to_vec());
            Ok(())
        }
    }

    fn input(tests: u64, hours: f64) -> EntryInput {
        EntryInput::new(tests, hours).unwrap()
    }

    #[test]
    fn test_initialize_uses_seed_when_empty() {
        let ledger = Ledger::initialize(MockRepo::default());
        assert_eq!(ledger.series(), seed_series().as_slice());
        assert_eq!(ledger.repository().saves.get(), 0);
    }

    #[test]
    fn test_initialize_restores_stored_series_verbatim() {
        let stored = vec![DataPoint::new("Jun", 7, 3.0), DataPoint::new("Jun", 9, 1.0)];
        let repo = MockRepo {
            stored: RefCell::new(Some(stored.clone())),
            ..Default::default()
        };
        let ledger = Ledger::initialize(repo);
        assert_eq!(ledger.series(), stored.as_slice());
    }

    #[test]
    fn test_initialize_keeps_stored_empty_series() {
        let repo = MockRepo {
            stored: RefCell::new(Some(Vec::new())),
            ..Default::default()
        };
        let ledger = Ledger::initialize(repo);
        assert!(ledger.series().is_empty());
        assert_eq!(ledger.derive_summary(), Summary::default());
    }

    #[test]
    fn test_initialize_falls_back_when_store_fails() {
        let repo = MockRepo {
            fail_load: true,
            ..Default::default()
        };
        let ledger = Ledger::initialize(repo);
        assert_eq!(ledger.series(), seed_series().as_slice());
    }

    #[test]
    fn test_initialize_falls_back_on_malformed_value() {
        let store = InMemoryStore::with_value(STORAGE_KEY, "{\"broken\":true}");
        let ledger = Ledger::initialize(StoreSeriesRepository::new(store));
        assert_eq!(ledger.series(), seed_series().as_slice());
    }

    #[test]
    fn test_initialize_twice_is_identical() {
        let store = InMemoryStore::new();
        let mut ledger = Ledger::initialize(StoreSeriesRepository::new(&store));
        ledger.record_entry_for("Apr", input(10, 1.0));

        let first = Ledger::initialize(StoreSeriesRepository::new(&store));
        let second = Ledger::initialize(StoreSeriesRepository::new(&store));
        assert_eq!(first.series(), second.series());
        assert_eq!(first.series(), ledger.series());
    }

    #[test]
    fn test_record_entry_scenario() {
        let mut ledger = Ledger::initialize(MockRepo::default());
        let before = ledger.derive_summary();

        let point = ledger.record_entry_for("Apr", input(20, 0.5)).clone();
        assert_eq!(point, DataPoint::new("Apr", 20, 40.0));

        let after = ledger.derive_summary();
        assert_eq!(after.total_hours_saved, before.total_hours_saved + 40.0);
        assert_eq!(after.current_tests, 20);
        assert_eq!(after.monthly_hours_saved, 40.0);
        assert_eq!(after.cost_savings, after.total_hours_saved * 100.0);
    }

    #[test]
    fn test_record_entry_uses_current_month() {
        let mut ledger = Ledger::initialize(MockRepo::default());
        let month = ledger.record_entry(input(1, 1.0)).month.clone();
        assert_eq!(month, crate::time::current_month_label());
    }

    #[test]
    fn test_every_append_saves_whole_series() {
        let mut ledger = Ledger::initialize(MockRepo::default());
        ledger.record_entry_for("Apr", input(1, 1.0));
        ledger.record_entry_for("May", input(2, 1.0));

        let repo = ledger.repository();
        assert_eq!(repo.saves.get(), 2);
        let stored = repo.stored.borrow().clone().unwrap();
        assert_eq!(stored.len(), 5);
        assert_eq!(stored.as_slice(), ledger.series());
    }

    #[test]
    fn test_failed_save_keeps_memory_authoritative() {
        let repo = MockRepo {
            fail_save: true,
            ..Default::default()
        };
        let mut ledger = Ledger::initialize(repo);
        ledger.record_entry_for("Apr", input(4, 2.0));

        assert_eq!(ledger.series().len(), 4);
        assert_eq!(ledger.derive_summary().monthly_hours_saved, 32.0);
        assert!(ledger.repository().stored.borrow().is_none());
    }

    #[test]
    fn test_duplicate_months_are_appended() {
        let mut ledger = Ledger::initialize(MockRepo::default());
        ledger.record_entry_for("Mar", input(5, 1.0));

        let march: Vec<_> = ledger.series().iter().filter(|p| p.month == "Mar").collect();
        assert_eq!(march.len(), 2);
        assert_eq!(ledger.derive_summary().current_tests, 5);
    }

    #[test]
    fn test_fractional_hours() {
        let mut ledger = Ledger::initialize(MockRepo::default());
        let point = ledger.record_entry_for("Apr", input(3, 0.1)).clone();
        assert!((point.hours_saved - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_submit_rejects_bad_input_without_appending() {
        let mut ledger = Ledger::initialize(MockRepo::default());
        let err = ledger.submit("twelve", "1").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput { .. }));
        assert_eq!(ledger.series().len(), 3);
        assert_eq!(ledger.repository().saves.get(), 0);
    }

    #[test]
    fn test_submit_records_valid_input() {
        let mut ledger = Ledger::initialize(MockRepo::default());
        let point = ledger.submit("20", "0.5").unwrap().clone();
        assert_eq!(point.hours_saved, 40.0);
        assert_eq!(ledger.series().len(), 4);
    }

    #[test]
    fn test_overflowing_entry_keeps_stored_history() {
        let store = InMemoryStore::new();
        let mut ledger = Ledger::initialize(StoreSeriesRepository::new(&store));
        ledger.submit("10", "1").unwrap();

        let err = ledger.submit("10", "1e308").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput { .. }));
        assert_eq!(ledger.series().len(), 4);
        assert!(ledger.series().iter().all(|p| p.hours_saved.is_finite()));

        let bytes = ledger.export_series().unwrap();
        assert_eq!(parse_export(&bytes).unwrap(), ledger.series());

        let reopened = Ledger::initialize(StoreSeriesRepository::new(&store));
        assert_eq!(reopened.series(), ledger.series());
    }

    #[test]
    fn test_nan_entry_never_reaches_repository() {
        let mut ledger = Ledger::initialize(MockRepo::default());

        assert!(EntryInput::new(1, f64::NAN).is_err());
        assert!(ledger.submit("1", "NaN").is_err());

        assert_eq!(ledger.repository().saves.get(), 0);
        assert!(ledger.repository().stored.borrow().is_none());
        assert_eq!(ledger.series(), seed_series().as_slice());
    }

    #[test]
    fn test_export_round_trip() {
        let mut ledger = Ledger::initialize(MockRepo::default());
        ledger.record_entry_for("Apr", input(3, 0.7));
        let bytes = ledger.export_series().unwrap();
        assert_eq!(parse_export(&bytes).unwrap(), ledger.series());
    }

    #[test]
    fn test_detached_store_behaves_as_fresh() {
        let mut ledger = Ledger::initialize(StoreSeriesRepository::new(DetachedStore));
        ledger.record_entry_for("Apr", input(1, 1.0));
        assert_eq!(ledger.series().len(), 4);

        let reopened = Ledger::initialize(StoreSeriesRepository::new(DetachedStore));
        assert_eq!(reopened.series(), seed_series().as_slice());
    }

    #[test]
    fn test_file_store_survives_sessions() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileKeyValueStore::new(Some(dir.path().to_path_buf())).unwrap();
            let mut ledger = Ledger::initialize(StoreSeriesRepository::new(store));
            ledger.record_entry_for("Apr", input(20, 0.5));
        }

        let store = FileKeyValueStore::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(store.get(STORAGE_KEY).unwrap().is_some());
        let ledger = Ledger::initialize(StoreSeriesRepository::new(store));
        assert_eq!(ledger.series().len(), 4);
        assert_eq!(ledger.derive_summary().total_hours_saved, 490.0);
    }
}

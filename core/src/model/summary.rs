use serde::{Deserialize, Serialize};

use crate::model::data_point::DataPoint;

/// Each automated test is assumed to replace this many manual runs a month.
pub const RUNS_PER_MONTH: f64 = 4.0;

/// Fully-loaded cost of one manual testing hour, in dollars.
pub const HOURLY_COST: f64 = 100.0;

pub fn calculate_hours_saved(tests: u64, hours_per_test: f64) -> f64 {
    tests as f64 * hours_per_test * RUNS_PER_MONTH
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub current_tests: u64,
    pub total_hours_saved: f64,
    pub monthly_hours_saved: f64,
    pub cost_savings: f64,
}

impl Summary {
    /// Recomputed from the whole series on every call; nothing is cached.
    pub fn derive(series: &[DataPoint]) -> Self {
        let total_hours_saved: f64 = series.iter().map(|p| p.hours_saved).sum();
        let (current_tests, monthly_hours_saved) = series
            .last()
            .map(|p| (p.tests, p.hours_saved))
            .unwrap_or((0, 0.0));

        Self {
            current_tests,
            total_hours_saved,
            monthly_hours_saved,
            cost_savings: total_hours_saved * HOURLY_COST,
        }
    }
}

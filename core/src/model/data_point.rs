use serde::{Deserialize, Serialize};

/// One monthly ROI record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub month: String,
    pub tests: u64,
    #[serde(rename = "hoursSaved")]
    pub hours_saved: f64,
}

impl DataPoint {
    pub fn new(month: impl Into<String>, tests: u64, hours_saved: f64) -> Self {
        Self {
            month: month.into(),
            tests,
            hours_saved,
        }
    }
}

/// Series used when nothing has been persisted yet.
pub fn seed_series() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Jan", 50, 100.0),
        DataPoint::new("Feb", 75, 150.0),
        DataPoint::new("Mar", 100, 200.0),
    ]
}

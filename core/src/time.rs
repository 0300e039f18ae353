use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Three-letter label for the month of `at`, e.g. "Jan".
pub fn month_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b").to_string()
}

pub fn current_month_label() -> String {
    month_label(&Local::now())
}

/// Label for a month number in `1..=12`.
pub fn month_label_for(month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(2000, month, 1).map(|d| d.format("%b").to_string())
}

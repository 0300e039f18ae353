use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use roi_ledger_core::{DataPoint, Summary};

use crate::format::{format_currency, format_hours, format_number};

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Tests")]
    tests: u64,
    #[tabled(rename = "Hours Saved")]
    hours_saved: String,
}

pub fn series_table(series: &[DataPoint]) -> String {
    let rows: Vec<SeriesRow> = series
        .iter()
        .enumerate()
        .map(|(i, p)| SeriesRow {
            index: i + 1,
            month: p.month.clone(),
            tests: p.tests,
            hours_saved: format_number(p.hours_saved),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));
    table.to_string()
}

pub fn show_series(series: &[DataPoint]) {
    if series.is_empty() {
        println!("No data points recorded.");
        return;
    }
    println!("{}", series_table(series));
}

pub fn summary_lines(summary: &Summary) -> Vec<(&'static str, String)> {
    vec![
        ("Current Tests", summary.current_tests.to_string()),
        ("Total Hours Saved", format_number(summary.total_hours_saved)),
        ("Monthly Savings", format_hours(summary.monthly_hours_saved)),
        ("Cost Savings ($)", format_currency(summary.cost_savings)),
    ]
}

pub fn show_summary(summary: &Summary) {
    for (label, value) in summary_lines(summary) {
        println!("{:<18} {}", label, value);
    }
}

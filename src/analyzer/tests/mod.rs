//! Test utilities for analyzer testing
//!
//! Builds small in-memory series so each query can be checked against
//! hand-computed values.

use chrono::NaiveDate;

use crate::analyzer::WeatherAnalyzer;
use crate::models::{WeatherRecord, WeatherSeries};

mod report_tests;

/// Helper to create a record with only the interesting fields set
pub fn record(
    date: &str,
    condition: &str,
    max_temp: f64,
    rain: f64,
    wind: f64,
    snow: f64,
) -> WeatherRecord {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    WeatherRecord::new(date, condition, max_temp, rain, wind, snow)
}

/// Helper to create an analyzer from records
pub fn analyzer_for(records: Vec<WeatherRecord>) -> WeatherAnalyzer {
    WeatherAnalyzer::new(WeatherSeries::new(records))
}

/// Helper to create `days` consecutive daily records starting 2020-01-01
///
/// Day `i` (0-based) has rain `i`, wind `i * 2`, max temp `i / 10` and no snow.
pub fn daily_records(days: usize) -> Vec<WeatherRecord> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    (0..days)
        .map(|i| {
            let value = i as f64;
            WeatherRecord::new(
                start + chrono::Days::new(i as u64),
                "clear sky",
                value / 10.0,
                value,
                value * 2.0,
                0.0,
            )
        })
        .collect()
}

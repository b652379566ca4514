//! Read-only queries over a parsed weather series
//!
//! Every query is a single linear scan over the records in file order.
//! Queries never fail: an empty or too-short series gives an empty list,
//! `0.0` for sums, or `None` for maxima and lookups.

pub mod report;

#[cfg(test)]
mod tests;

pub use report::AnalysisReport;

use crate::error::Result;
use crate::models::{WeatherRecord, WeatherSeries};
use crate::parser::load_series;
use chrono::{Datelike, Month, NaiveDate};
use std::path::Path;
use tracing::warn;

/// Query interface over one weather series
#[derive(Debug, Clone)]
pub struct WeatherAnalyzer {
    series: WeatherSeries,
}

impl WeatherAnalyzer {
    pub fn new(series: WeatherSeries) -> Self {
        Self { series }
    }

    /// Load and parse a data file, failing if any row is invalid
    pub fn from_file(file_path: &Path) -> Result<Self> {
        Ok(Self::new(load_series(file_path)?))
    }

    pub fn series(&self) -> &WeatherSeries {
        &self.series
    }

    /// All records, in file order
    pub fn records(&self) -> &[WeatherRecord] {
        self.series.records()
    }

    /// Records whose condition contains `condition`
    ///
    /// Matching is case-sensitive against the stored lowercase condition, so
    /// a filter containing uppercase letters never matches.
    pub fn records_matching_condition(&self, condition: &str) -> Vec<&WeatherRecord> {
        if condition.chars().any(char::is_uppercase) {
            warn!(
                "Condition filter '{}' contains uppercase letters and cannot match stored conditions",
                condition
            );
        }

        self.series
            .iter()
            .filter(|record| record.condition().contains(condition))
            .collect()
    }

    /// Dates of the records whose condition contains `condition`
    pub fn dates_matching_condition(&self, condition: &str) -> Vec<NaiveDate> {
        self.records_matching_condition(condition)
            .into_iter()
            .map(WeatherRecord::date)
            .collect()
    }

    /// Sum of rainfall over every record
    pub fn total_rainfall(&self) -> f64 {
        sum_rain(self.series.iter())
    }

    /// Highest maximum temperature, `None` for an empty series
    pub fn max_temperature(&self) -> Option<f64> {
        max_of(self.series.iter().map(WeatherRecord::max_temp))
    }

    /// Highest maximum wind speed, `None` for an empty series
    pub fn max_wind_speed(&self) -> Option<f64> {
        max_of(self.series.iter().map(WeatherRecord::max_wind_speed))
    }

    /// First record in file order with any snowfall
    pub fn first_day_with_snow(&self) -> Option<&WeatherRecord> {
        self.series.iter().find(|record| record.has_snow())
    }

    /// Up to `n` records with snowfall, in file order
    ///
    /// These are the first `n` snowy rows, not `n` consecutive days.
    pub fn first_n_days_with_snow(&self, n: usize) -> Vec<&WeatherRecord> {
        self.series
            .iter()
            .filter(|record| record.has_snow())
            .take(n)
            .collect()
    }

    /// Highest wind speed among the first `days` rows
    pub fn max_wind_speed_in_first_n_days(&self, days: usize) -> Option<f64> {
        max_of(
            self.series
                .iter()
                .take(days)
                .map(WeatherRecord::max_wind_speed),
        )
    }

    /// Rainfall over every row after the first `days`
    pub fn total_rainfall_after_first_n_days(&self, days: usize) -> f64 {
        sum_rain(self.series.iter().skip(days))
    }

    /// Rainfall over rows `skip..skip + take`, clipped to the series length
    pub fn total_rainfall_in_window(&self, skip: usize, take: usize) -> f64 {
        sum_rain(self.series.iter().skip(skip).take(take))
    }

    /// Rainfall over every record in `month`, summed across all years
    pub fn total_rainfall_for_month(&self, month: Month) -> f64 {
        let month_number = month.number_from_month();
        sum_rain(
            self.series
                .iter()
                .filter(|record| record.date().month() == month_number),
        )
    }
}

impl From<WeatherSeries> for WeatherAnalyzer {
    fn from(series: WeatherSeries) -> Self {
        Self::new(series)
    }
}

fn sum_rain<'a>(records: impl Iterator<Item = &'a WeatherRecord>) -> f64 {
    records.fold(0.0, |total, record| total + record.rain_sum())
}

fn max_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.max_by(|left, right| left.total_cmp(right))
}

//! Core data structures for daily weather observations.
//!
//! A [`WeatherRecord`] is one parsed row; a [`WeatherSeries`] is every row of
//! one file, kept in file order. Both are immutable once built.

use crate::constants::CSV_HEADER;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One day of weather observations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRecord {
    date: NaiveDate,
    condition: String,
    max_temp: f64,
    rain_sum: f64,
    max_wind_speed: f64,
    snowfall_sum: f64,
}

impl WeatherRecord {
    /// Create a record, normalising the condition to trimmed lowercase
    pub fn new(
        date: NaiveDate,
        condition: &str,
        max_temp: f64,
        rain_sum: f64,
        max_wind_speed: f64,
        snowfall_sum: f64,
    ) -> Self {
        Self {
            date,
            condition: condition.trim().to_lowercase(),
            max_temp,
            rain_sum,
            max_wind_speed,
            snowfall_sum,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Lowercase WMO weather description
    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }

    pub fn rain_sum(&self) -> f64 {
        self.rain_sum
    }

    pub fn max_wind_speed(&self) -> f64 {
        self.max_wind_speed
    }

    pub fn snowfall_sum(&self) -> f64 {
        self.snowfall_sum
    }

    /// Any snowfall at all was recorded for the day
    pub fn has_snow(&self) -> bool {
        self.snowfall_sum > 0.0
    }

    /// Format as a data row of the input file (two decimal places)
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{:.2},{:.2},{:.2},{:.2}",
            self.date,
            self.condition,
            self.max_temp,
            self.rain_sum,
            self.max_wind_speed,
            self.snowfall_sum
        )
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, maxTemp={:.1}, rain={:.1}, maxWindSpeed={:.1}, snowfall={:.1}",
            self.date,
            self.condition,
            self.max_temp,
            self.rain_sum,
            self.max_wind_speed,
            self.snowfall_sum
        )
    }
}

/// All records of one file, in file order
///
/// Rows are trusted to be in chronological order; positional queries
/// ("first 31 days") rely on it but nothing checks it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeatherSeries {
    records: Vec<WeatherRecord>,
}

impl WeatherSeries {
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeatherRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Date of the first row (not necessarily the earliest date)
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(WeatherRecord::date)
    }

    /// Date of the last row
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(WeatherRecord::date)
    }

    /// Render the whole series in the input file format, header included
    pub fn to_csv(&self) -> String {
        let mut csv = String::with_capacity((self.records.len() + 1) * 48);
        csv.push_str(CSV_HEADER);
        csv.push('\n');
        for record in &self.records {
            csv.push_str(&record.to_csv_line());
            csv.push('\n');
        }
        csv
    }
}

impl<'a> IntoIterator for &'a WeatherSeries {
    type Item = &'a WeatherRecord;
    type IntoIter = std::slice::Iter<'a, WeatherRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromStr for WeatherSeries {
    type Err = crate::error::WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_series(s)
    }
}

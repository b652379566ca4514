//! Field parsing utilities for weather data rows
//!
//! Each helper receives an already trimmed field and the line number it came
//! from, so errors can point at the offending row.

use crate::constants::DATE_FORMAT;
use crate::error::{Result, WeatherError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Strict `YYYY-MM-DD`: zero-padded month and day, four digit year
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

/// Parse the date column
pub fn parse_date(value: &str, line: usize) -> Result<NaiveDate> {
    if !DATE_PATTERN.is_match(value) {
        return Err(WeatherError::DateParse {
            line,
            value: value.to_string(),
            source: None,
        });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| WeatherError::DateParse {
        line,
        value: value.to_string(),
        source: Some(e),
    })
}

/// Normalise the condition column; any text is accepted
pub fn parse_condition(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Parse a measurement column as a finite float
///
/// No range checks: negative rain or snow is accepted as-is.
pub fn parse_measurement(value: &str, field: &'static str, line: usize) -> Result<f64> {
    let parsed = value.parse::<f64>().map_err(|e| WeatherError::NumberParse {
        line,
        field,
        value: value.to_string(),
        source: Some(e),
    })?;

    if !parsed.is_finite() {
        return Err(WeatherError::NumberParse {
            line,
            field,
            value: value.to_string(),
            source: None,
        });
    }

    Ok(parsed)
}

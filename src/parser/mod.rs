//! Weather data file parser
//!
//! Turns the text of a daily weather CSV file into a [`WeatherSeries`]. The
//! format is deliberately naive:
//!
//! - the first line is a header and is skipped without being looked at
//! - every other line is split on `,` (no quoting) into exactly six fields:
//!   date, condition, maxTemp, rainSum, maxWindSpeed, snowfallSum
//! - one bad row rejects the whole file
//!
//! ## Architecture
//!
//! - [`record_parser`] - single row processing
//! - [`field_parsers`] - date, condition and measurement parsing
//!
//! ## Usage
//!
//! ```rust
//! use weather_analyzer::parser::parse_series;
//!
//! let text = "Date,WMO name,maxTemp,rainSum,maxWindSpeed,snowFallSum\n\
//!             2020-01-01,Overcast,5.20,0.00,12.30,0.00\n";
//! let series = parse_series(text).unwrap();
//! assert_eq!(series.len(), 1);
//! assert_eq!(series.records()[0].condition(), "overcast");
//! ```

pub mod field_parsers;
pub mod record_parser;

#[cfg(test)]
mod tests;

pub use record_parser::parse_record;

use crate::error::{Result, WeatherError};
use crate::models::WeatherSeries;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parse already-split lines; the first one is the header
pub fn parse_lines<I, S>(lines: I) -> Result<WeatherSeries>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();

    match lines.next() {
        Some(header) => debug!("Skipping header line: {}", header.as_ref()),
        None => {
            warn!("Weather data is empty, no header line found");
            return Ok(WeatherSeries::default());
        }
    }

    // Header is line 1, so data rows start at line 2
    let records = lines
        .enumerate()
        .map(|(index, row)| parse_record(row.as_ref(), index + 2))
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} weather records", records.len());
    Ok(WeatherSeries::new(records))
}

/// Parse the full text of a weather data file
pub fn parse_series(content: &str) -> Result<WeatherSeries> {
    parse_lines(content.lines())
}

/// Read and parse a weather data file from disk
pub fn load_series(file_path: &Path) -> Result<WeatherSeries> {
    info!("Loading weather data from {}", file_path.display());

    let content =
        std::fs::read_to_string(file_path).map_err(|e| WeatherError::io(file_path, e))?;
    let series = parse_series(&content)?;

    match (series.first_date(), series.last_date()) {
        (Some(first), Some(last)) => info!(
            "Loaded {} weather records ({} to {})",
            series.len(),
            first,
            last
        ),
        _ => warn!("No weather records found in {}", file_path.display()),
    }

    Ok(series)
}

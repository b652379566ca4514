//! Command-line argument definitions for the weather analyzer
//!
//! This module defines the CLI interface using the clap derive API. Every
//! query parameter of the report can be overridden from the command line.

use crate::config::AnalysisConfig;
use crate::constants::{
    DEFAULT_CONDITION, DEFAULT_DATA_FILE, DEFAULT_LEADING_DAYS, DEFAULT_REPORT_MONTHS,
    DEFAULT_SNOW_DAY_COUNTS, DEFAULT_WINDOW_DAYS,
};
use crate::error::{Result, WeatherError};
use chrono::Month;
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// CLI arguments for the weather analyzer
///
/// Loads a daily weather observation CSV file and prints rainfall,
/// temperature, wind and snow statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "weather-analyzer",
    version,
    about = "Compute rainfall, temperature, wind and snow statistics from a daily weather CSV file",
    long_about = "Reads a CSV file of daily weather observations (date, WMO condition, maxTemp, \
                  rainSum, maxWindSpeed, snowFallSum) and prints a report: days matching a \
                  condition, totals and maxima, the first snow days, statistics for a leading \
                  block of days and the window that follows it, and rainfall per month."
)]
pub struct Args {
    /// Weather data CSV file
    ///
    /// The first line is a header; every other line must have exactly six
    /// comma-separated fields. Defaults to the bundled sample dataset.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// List days whose condition contains this text
    #[arg(
        long = "condition",
        value_name = "TEXT",
        default_value = DEFAULT_CONDITION,
        help = "Condition substring to filter days by (matched in lowercase)"
    )]
    pub condition: String,

    /// How many snow days to list, one listing per value
    #[arg(
        long = "snow-days",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Comma-separated counts of first snow days to list (default: 3,5)"
    )]
    pub snow_days: Option<Vec<usize>>,

    /// Size of the leading block of days
    #[arg(
        long = "leading-days",
        value_name = "DAYS",
        default_value_t = DEFAULT_LEADING_DAYS,
        help = "Number of leading rows treated as the first block of days"
    )]
    pub leading_days: usize,

    /// Length of the rain window after the leading block
    #[arg(
        long = "window-days",
        value_name = "DAYS",
        default_value_t = DEFAULT_WINDOW_DAYS,
        help = "Number of rows in the rain window after the leading block"
    )]
    pub window_days: usize,

    /// Months to total rainfall for
    #[arg(
        long = "months",
        value_name = "LIST",
        help = "Comma-separated month names or numbers (default: april,october)"
    )]
    pub months: Option<MonthList>,

    /// Print every record before the report
    #[arg(long = "list", help = "Print every parsed record")]
    pub list: bool,

    /// Write the parsed records back out as CSV
    #[arg(
        long = "export",
        value_name = "FILE",
        help = "Write the parsed records to a CSV file"
    )]
    pub export: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors on stderr
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated month lists
#[derive(Debug, Clone, PartialEq)]
pub struct MonthList {
    pub months: Vec<Month>,
}

impl FromStr for MonthList {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self> {
        let months = s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_month)
            .collect::<Result<Vec<_>>>()?;

        if months.is_empty() {
            return Err(WeatherError::configuration("Month list cannot be empty"));
        }

        Ok(MonthList { months })
    }
}

/// Parse a month name ("april", "Apr") or number (1-12)
fn parse_month(value: &str) -> Result<Month> {
    if let Ok(number) = value.parse::<u8>() {
        return Month::try_from(number).map_err(|_| {
            WeatherError::configuration(format!("Month number must be 1-12, got {}", number))
        });
    }

    value
        .parse::<Month>()
        .map_err(|_| WeatherError::configuration(format!("Unknown month '{}'", value)))
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(export) = &self.export {
            if same_file(export, &self.data_path()) {
                return Err(WeatherError::configuration(format!(
                    "Export path must differ from the data file: {}",
                    export.display()
                )));
            }
        }

        Ok(())
    }

    /// Data file to analyse, falling back to the bundled sample
    pub fn data_path(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Build the report configuration from the arguments
    pub fn analysis_config(&self) -> AnalysisConfig {
        let months = match &self.months {
            Some(list) => list.months.clone(),
            None => DEFAULT_REPORT_MONTHS.to_vec(),
        };

        let snow_days = match &self.snow_days {
            Some(counts) => counts.clone(),
            None => DEFAULT_SNOW_DAY_COUNTS.to_vec(),
        };

        AnalysisConfig::default()
            .with_condition(&self.condition)
            .with_snow_day_counts(snow_days)
            .with_leading_days(self.leading_days)
            .with_window_days(self.window_days)
            .with_report_months(months)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Paths that resolve to the same file; literal comparison when either does not exist yet
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

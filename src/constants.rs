//! Application constants for the weather analyzer
//!
//! File format definitions and the default query parameters used by the
//! report when nothing else is configured.

use chrono::Month;

// =============================================================================
// Input File Format
// =============================================================================

/// Header line written at the top of exported CSV files
pub const CSV_HEADER: &str = "Date,WMO name,maxTemp,rainSum,maxWindSpeed,snowFallSum";

/// Field separator; quoting and escaping are not supported
pub const FIELD_DELIMITER: char = ',';

/// Number of fields every data row must contain
pub const EXPECTED_FIELD_COUNT: usize = 6;

/// chrono format for the date column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column names used in error messages for the measurement fields
pub mod fields {
    pub const MAX_TEMP: &str = "maxTemp";
    pub const RAIN_SUM: &str = "rainSum";
    pub const MAX_WIND_SPEED: &str = "maxWindSpeed";
    pub const SNOWFALL_SUM: &str = "snowfallSum";
}

// =============================================================================
// Report Defaults
// =============================================================================

/// Data file analysed when no path is given on the command line
pub const DEFAULT_DATA_FILE: &str = "data/new-york.csv";

/// Condition substring the report filters on
pub const DEFAULT_CONDITION: &str = "overcast";

/// "First N days with snow" listings included in the report
pub const DEFAULT_SNOW_DAY_COUNTS: &[usize] = &[3, 5];

/// Length of the leading block of days (one month of daily rows)
pub const DEFAULT_LEADING_DAYS: usize = 31;

/// Length of the rain window that follows the leading block
pub const DEFAULT_WINDOW_DAYS: usize = 28;

/// Months whose rainfall totals the report lists
pub const DEFAULT_REPORT_MONTHS: &[Month] = &[Month::April, Month::October];

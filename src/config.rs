//! Configuration for report generation.
//!
//! Holds the query parameters the report runs with. Defaults reproduce the
//! classic report: "overcast" days, the first 3 and 5 snow days, a 31 day
//! leading block followed by a 28 day window, and April/October rainfall.

use crate::constants::{
    DEFAULT_CONDITION, DEFAULT_LEADING_DAYS, DEFAULT_REPORT_MONTHS, DEFAULT_SNOW_DAY_COUNTS,
    DEFAULT_WINDOW_DAYS,
};
use chrono::Month;
use tracing::debug;

/// Query parameters for [`AnalysisReport`](crate::analyzer::AnalysisReport)
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Lowercase substring matched against record conditions
    pub condition: String,

    /// One "first N days with snow" listing per entry
    pub snow_day_counts: Vec<usize>,

    /// Number of leading rows treated as the first block of days
    pub leading_days: usize,

    /// Number of rows in the rain window after the leading block
    pub window_days: usize,

    /// Months to total rainfall for, across all years
    pub report_months: Vec<Month>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            condition: DEFAULT_CONDITION.to_string(),
            snow_day_counts: DEFAULT_SNOW_DAY_COUNTS.to_vec(),
            leading_days: DEFAULT_LEADING_DAYS,
            window_days: DEFAULT_WINDOW_DAYS,
            report_months: DEFAULT_REPORT_MONTHS.to_vec(),
        }
    }
}

impl AnalysisConfig {
    /// Set the condition filter, lowercased so it can match stored conditions
    pub fn with_condition(mut self, condition: &str) -> Self {
        let normalised = condition.trim().to_lowercase();
        if normalised != condition {
            debug!("Normalised condition filter '{}' to '{}'", condition, normalised);
        }
        self.condition = normalised;
        self
    }

    pub fn with_snow_day_counts(mut self, counts: Vec<usize>) -> Self {
        self.snow_day_counts = counts;
        self
    }

    pub fn with_leading_days(mut self, days: usize) -> Self {
        self.leading_days = days;
        self
    }

    pub fn with_window_days(mut self, days: usize) -> Self {
        self.window_days = days;
        self
    }

    pub fn with_report_months(mut self, months: Vec<Month>) -> Self {
        self.report_months = months;
        self
    }
}

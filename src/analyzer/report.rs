//! Summary report combining the standard analyzer queries
//!
//! The report runs a fixed sequence of queries with parameters taken from
//! [`AnalysisConfig`] and keeps the results in a serialisable structure, so
//! the CLI can render it either as text or JSON.

use super::WeatherAnalyzer;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::WeatherRecord;
use chrono::{Month, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// First snow days for one requested count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnowDays {
    pub requested: usize,
    pub records: Vec<WeatherRecord>,
}

/// Rainfall total for one calendar month across all years
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRainfall {
    pub month: Month,
    pub total: f64,
}

/// Results of every report query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub record_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,

    pub condition: String,
    pub matching_records: Vec<WeatherRecord>,

    pub total_rainfall: f64,
    pub max_temperature: Option<f64>,
    pub max_wind_speed: Option<f64>,

    pub first_day_with_snow: Option<WeatherRecord>,
    pub snow_days: Vec<SnowDays>,

    pub leading_days: usize,
    pub window_days: usize,
    pub max_wind_speed_in_leading_days: Option<f64>,
    pub rainfall_after_leading_days: f64,
    pub rainfall_in_window: f64,

    pub monthly_rainfall: Vec<MonthlyRainfall>,
}

impl AnalysisReport {
    /// Run every report query against the analyzer
    pub fn generate(analyzer: &WeatherAnalyzer, config: &AnalysisConfig) -> Self {
        let series = analyzer.series();
        debug!(
            "Generating report over {} records with {:?}",
            series.len(),
            config
        );

        let snow_days = config
            .snow_day_counts
            .iter()
            .map(|&requested| SnowDays {
                requested,
                records: analyzer
                    .first_n_days_with_snow(requested)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
            .collect();

        let monthly_rainfall = config
            .report_months
            .iter()
            .map(|&month| MonthlyRainfall {
                month,
                total: analyzer.total_rainfall_for_month(month),
            })
            .collect();

        Self {
            record_count: series.len(),
            first_date: series.first_date(),
            last_date: series.last_date(),
            condition: config.condition.clone(),
            matching_records: analyzer
                .records_matching_condition(&config.condition)
                .into_iter()
                .cloned()
                .collect(),
            total_rainfall: analyzer.total_rainfall(),
            max_temperature: analyzer.max_temperature(),
            max_wind_speed: analyzer.max_wind_speed(),
            first_day_with_snow: analyzer.first_day_with_snow().cloned(),
            snow_days,
            leading_days: config.leading_days,
            window_days: config.window_days,
            max_wind_speed_in_leading_days: analyzer
                .max_wind_speed_in_first_n_days(config.leading_days),
            rainfall_after_leading_days: analyzer
                .total_rainfall_after_first_n_days(config.leading_days),
            rainfall_in_window: analyzer
                .total_rainfall_in_window(config.leading_days, config.window_days),
            monthly_rainfall,
        }
    }

    /// Pretty-printed JSON rendering
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! Weather Analyzer Library
//!
//! Reads CSV files of daily weather observations and answers simple
//! questions about them: which days had a given condition, how much it
//! rained, the hottest and windiest days, when it first snowed, and how
//! rainfall splits across blocks of days and calendar months.
//!
//! This library provides tools for:
//! - Parsing and validating weather CSV files (one bad row rejects the file)
//! - Read-only queries over the parsed series in file order
//! - A configurable summary report, renderable as text or JSON
//! - Exporting a parsed series back to CSV
//!
//! ```rust
//! use weather_analyzer::{WeatherAnalyzer, WeatherSeries};
//!
//! let series: WeatherSeries = "Date,WMO name,maxTemp,rainSum,maxWindSpeed,snowFallSum\n\
//!                              2020-01-01,overcast,5.20,1.50,12.30,0.00\n\
//!                              2020-01-02,slight snow fall,-1.00,0.00,8.00,2.00\n"
//!     .parse()
//!     .unwrap();
//! let analyzer = WeatherAnalyzer::new(series);
//!
//! assert_eq!(analyzer.total_rainfall(), 1.5);
//! assert_eq!(analyzer.max_temperature(), Some(5.2));
//! assert_eq!(analyzer.first_day_with_snow().unwrap().snowfall_sum(), 2.0);
//! ```

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use analyzer::{AnalysisReport, WeatherAnalyzer};
pub use config::AnalysisConfig;
pub use error::{Result, WeatherError};
pub use models::{WeatherRecord, WeatherSeries};

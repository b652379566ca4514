//! Command implementations for the weather analyzer CLI
//!
//! This module contains the main execution flow, logging setup and report
//! rendering for the CLI interface.

use crate::analyzer::{AnalysisReport, WeatherAnalyzer};
use crate::cli::args::{Args, OutputFormat};
use crate::export::write_csv;
use crate::models::WeatherRecord;
use anyhow::{Context, Result};
use colored::*;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

/// Main command runner for the weather analyzer
///
/// 1. Set up logging
/// 2. Load and validate the data file
/// 3. Run the report queries and print the result
pub fn run(args: Args) -> Result<AnalysisReport> {
    setup_logging(&args);
    execute(&args)
}

/// Everything `run` does after logging is initialised
pub fn execute(args: &Args) -> Result<AnalysisReport> {
    let start_time = Instant::now();
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let data_path = args.data_path();
    let analyzer = WeatherAnalyzer::from_file(&data_path)
        .with_context(|| format!("Could not load weather data from {}", data_path.display()))?;

    if let Some(export_path) = &args.export {
        write_csv(analyzer.series(), export_path)?;
    }

    let config = args.analysis_config();
    let report = AnalysisReport::generate(&analyzer, &config);

    match args.output_format {
        OutputFormat::Human => {
            let listing = args.list.then(|| analyzer.records());
            print!("{}", HumanReport::new(&report, listing));
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    info!(
        "Analysed {} records in {}ms",
        report.record_count,
        start_time.elapsed().as_millis()
    );
    Ok(report)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_analyzer={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Text rendering of a report, optionally preceded by every record
pub struct HumanReport<'a> {
    report: &'a AnalysisReport,
    listing: Option<&'a [WeatherRecord]>,
}

impl<'a> HumanReport<'a> {
    pub fn new(report: &'a AnalysisReport, listing: Option<&'a [WeatherRecord]>) -> Self {
        Self { report, listing }
    }
}

impl fmt::Display for HumanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        if let Some(records) = self.listing {
            writeln!(f, "{}", "Weather Data".bright_green().bold())?;
            for record in records {
                writeln!(f, "  {}", record)?;
            }
            writeln!(f)?;
        }

        let period = match (report.first_date, report.last_date) {
            (Some(first), Some(last)) => format!("{} to {}", first, last),
            _ => "no data".to_string(),
        };
        writeln!(
            f,
            "{} {} ({})",
            "Weather Summary:".bright_green().bold(),
            report.record_count.to_string().bright_white().bold(),
            period
        )?;

        writeln!(
            f,
            "\n{}",
            format!("Days with condition '{}':", report.condition).bright_cyan()
        )?;
        write_records(f, &report.matching_records, "No matching days found.")?;

        writeln!(f)?;
        write_value(f, "Total Rainfall:", format_amount(report.total_rainfall))?;
        write_value(f, "Max Temperature:", format_extreme(report.max_temperature))?;
        write_value(f, "Max Wind Speed:", format_extreme(report.max_wind_speed))?;

        writeln!(f, "\n{}", "First day with snow:".bright_cyan())?;
        match &report.first_day_with_snow {
            Some(record) => writeln!(f, "  {}", record)?,
            None => writeln!(f, "  No snow days found.")?,
        }

        for snow_days in &report.snow_days {
            writeln!(
                f,
                "{}",
                format!("First {} days with snow:", snow_days.requested).bright_cyan()
            )?;
            write_records(f, &snow_days.records, "No snow days found.")?;
        }

        writeln!(f)?;
        write_value(
            f,
            &format!("Max Wind Speed in First {} Days:", report.leading_days),
            format_extreme(report.max_wind_speed_in_leading_days),
        )?;
        write_value(
            f,
            &format!("Total Rainfall After First {} Days:", report.leading_days),
            format_amount(report.rainfall_after_leading_days),
        )?;
        write_value(
            f,
            &format!(
                "Total Rainfall in Next {} Days After First {} Days:",
                report.window_days, report.leading_days
            ),
            format_amount(report.rainfall_in_window),
        )?;

        for monthly in &report.monthly_rainfall {
            write_value(
                f,
                &format!("Total Rainfall for {}:", monthly.month.name()),
                format_amount(monthly.total),
            )?;
        }

        Ok(())
    }
}

fn write_records(
    f: &mut fmt::Formatter<'_>,
    records: &[WeatherRecord],
    empty_message: &str,
) -> fmt::Result {
    if records.is_empty() {
        writeln!(f, "  {}", empty_message)?;
    }
    for record in records {
        writeln!(f, "  {}", record)?;
    }
    Ok(())
}

fn write_value(f: &mut fmt::Formatter<'_>, label: &str, value: String) -> fmt::Result {
    writeln!(f, "{} {}", label.bright_cyan(), value.bright_white())
}

fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Maxima over an empty range print as NaN
fn format_extreme(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_string(), format_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::models::WeatherSeries;
    use crate::parser::parse_series;
    use clap::Parser;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const CONTENT: &str = "Date,WMO name,maxTemp,rainSum,maxWindSpeed,snowFallSum
2020-01-01,Overcast,5.20,1.00,12.30,0.00
2020-01-02,Slight snow fall,-1.00,0.50,20.00,1.50
2020-04-10,Slight rain,14.00,4.25,9.00,0.00";

    fn sample_report() -> (AnalysisReport, WeatherAnalyzer) {
        let analyzer = WeatherAnalyzer::new(parse_series(CONTENT).unwrap());
        let report = AnalysisReport::generate(&analyzer, &AnalysisConfig::default());
        (report, analyzer)
    }

    #[test]
    fn test_human_report_contents() {
        let (report, _) = sample_report();
        let text = HumanReport::new(&report, None).to_string();

        assert!(text.contains("2020-01-01, overcast, maxTemp=5.2, rain=1.0, maxWindSpeed=12.3, snowfall=0.0"));
        assert!(text.contains("Total Rainfall:"));
        assert!(text.contains("5.75"));
        assert!(text.contains("First 3 days with snow:"));
        assert!(text.contains("Total Rainfall for April:"));
        assert!(text.contains("4.25"));
        assert!(!text.contains("Weather Data"));
    }

    #[test]
    fn test_human_report_listing() {
        let (report, analyzer) = sample_report();
        let text = HumanReport::new(&report, Some(analyzer.records())).to_string();

        assert!(text.contains("Weather Data"));
        assert!(text.contains("2020-04-10, slight rain, maxTemp=14.0"));
    }

    #[test]
    fn test_human_report_empty_series() {
        let analyzer = WeatherAnalyzer::new(WeatherSeries::default());
        let report = AnalysisReport::generate(&analyzer, &AnalysisConfig::default());
        let text = HumanReport::new(&report, None).to_string();

        assert!(text.contains("no data"));
        assert!(text.contains("NaN"));
        assert!(text.contains("No snow days found."));
        assert!(text.contains("No matching days found."));
    }

    #[test]
    fn test_format_extreme() {
        assert_eq!(format_extreme(None), "NaN");
        assert_eq!(format_extreme(Some(22.5)), "22.50");
    }

    #[test]
    fn test_execute_with_export() {
        let mut data_file = NamedTempFile::new().unwrap();
        writeln!(data_file, "{}", CONTENT).unwrap();
        let temp_dir = TempDir::new().unwrap();
        let export_path = temp_dir.path().join("export.csv");

        let args = Args::try_parse_from([
            "weather-analyzer",
            data_file.path().to_str().unwrap(),
            "--export",
            export_path.to_str().unwrap(),
            "--format",
            "json",
        ])
        .unwrap();

        let report = execute(&args).unwrap();
        assert_eq!(report.record_count, 3);
        assert_eq!(report.max_temperature, Some(14.0));

        let exported = crate::parser::load_series(&export_path).unwrap();
        assert_eq!(exported.len(), 3);
    }

    #[test]
    fn test_execute_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.csv");
        let args = Args::try_parse_from(["weather-analyzer", missing.to_str().unwrap()]).unwrap();

        let error = execute(&args).unwrap_err();
        assert!(format!("{:#}", error).contains("Could not load weather data"));
    }
}

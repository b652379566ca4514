//! Tests for report generation

use super::*;
use crate::analyzer::AnalysisReport;
use crate::config::AnalysisConfig;
use chrono::Month;

#[test]
fn test_report_on_empty_series() {
    let report = AnalysisReport::generate(&analyzer_for(vec![]), &AnalysisConfig::default());

    assert_eq!(report.record_count, 0);
    assert_eq!(report.first_date, None);
    assert!(report.matching_records.is_empty());
    assert_eq!(report.total_rainfall, 0.0);
    assert_eq!(report.max_temperature, None);
    assert_eq!(report.max_wind_speed, None);
    assert_eq!(report.first_day_with_snow, None);
    assert_eq!(report.snow_days.len(), 2);
    assert!(report.snow_days.iter().all(|days| days.records.is_empty()));
    assert_eq!(report.max_wind_speed_in_leading_days, None);
    assert_eq!(report.rainfall_after_leading_days, 0.0);
    assert_eq!(report.rainfall_in_window, 0.0);
    assert_eq!(report.monthly_rainfall.len(), 2);
}

#[test]
fn test_report_uses_config_parameters() {
    let mut records = daily_records(60);
    records.push(record("2020-03-01", "Overcast", 1.0, 1.5, 3.0, 4.0));
    let analyzer = analyzer_for(records);

    let config = AnalysisConfig::default()
        .with_condition("overcast")
        .with_snow_day_counts(vec![1])
        .with_leading_days(10)
        .with_window_days(5)
        .with_report_months(vec![Month::March]);

    let report = AnalysisReport::generate(&analyzer, &config);

    assert_eq!(report.record_count, 61);
    assert_eq!(report.matching_records.len(), 1);
    assert_eq!(report.snow_days[0].requested, 1);
    assert_eq!(report.snow_days[0].records.len(), 1);
    assert_eq!(
        report.first_day_with_snow.as_ref().map(|r| r.snowfall_sum()),
        Some(4.0)
    );
    // Wind of rows 0..10 peaks at 18
    assert_eq!(report.max_wind_speed_in_leading_days, Some(18.0));
    // Rows 10..15: 10 + 11 + 12 + 13 + 14
    assert_eq!(report.rainfall_in_window, 60.0);
    // The daily block ends on 2020-02-29, so only the extra row is in March
    assert_eq!(report.monthly_rainfall[0].month, Month::March);
    assert_eq!(report.monthly_rainfall[0].total, 1.5);
}

#[test]
fn test_report_serialises_to_json() {
    let analyzer = analyzer_for(vec![record("2020-04-02", "overcast", 11.0, 2.0, 14.0, 0.0)]);
    let report = AnalysisReport::generate(&analyzer, &AnalysisConfig::default());

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["record_count"], 1);
    assert_eq!(json["max_temperature"], 11.0);
    assert_eq!(json["first_day_with_snow"], serde_json::Value::Null);
    assert_eq!(json["matching_records"][0]["condition"], "overcast");
    assert_eq!(json["matching_records"][0]["date"], "2020-04-02");
    assert_eq!(json["monthly_rainfall"][0]["total"], 2.0);
}

//! Test utilities for weather data parser testing

use std::io::Write;
use tempfile::NamedTempFile;

use crate::constants::CSV_HEADER;


/// Helper to create well formed file content with three data rows
pub fn create_test_weather_csv() -> String {
    format!(
        "{CSV_HEADER}
2020-01-01,Overcast,5.20,0.00,12.30,0.00
2020-01-02, Slight rain ,7.10,3.40,20.10,0.00
2020-01-03,Moderate snow fall,-1.50,0.20,15.00,2.10"
    )
}

/// Helper to build file content from data rows, prepending the header
pub fn with_header(rows: &[&str]) -> String {
    let mut content = String::from(CSV_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}

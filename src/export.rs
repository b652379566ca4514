//! CSV export of a parsed weather series.
//!
//! Writes the same format the parser reads: the standard header followed by
//! one two-decimal row per record, so an exported file loads back unchanged.

use crate::error::{Result, WeatherError};
use crate::models::WeatherSeries;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write `series` to `output_path`, replacing any existing file
pub fn write_csv(series: &WeatherSeries, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| WeatherError::export(output_path, e))?;
    }

    let file = File::create(output_path).map_err(|e| WeatherError::export(output_path, e))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(series.to_csv().as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| WeatherError::export(output_path, e))?;

    info!(
        "Exported {} weather records to {}",
        series.len(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{load_series, parse_series};
    use tempfile::TempDir;

    const CONTENT: &str = "Date,WMO name,maxTemp,rainSum,maxWindSpeed,snowFallSum
2020-01-01,Overcast,5.2,0,12.3,0
2020-01-02,Slight snow fall,-0.75,0.1,8,1.25";

    #[test]
    fn test_export_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("nested").join("export.csv");
        let series = parse_series(CONTENT).unwrap();

        write_csv(&series, &output_path).unwrap();

        let written = std::fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("2020-01-02,slight snow fall,-0.75,0.10,8.00,1.25"));
        assert_eq!(load_series(&output_path).unwrap(), series);
    }

    #[test]
    fn test_export_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let series = parse_series(CONTENT).unwrap();

        let error = write_csv(&series, temp_dir.path()).unwrap_err();
        assert!(matches!(error, WeatherError::Export { .. }));
    }
}

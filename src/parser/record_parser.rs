//! Individual row parsing for weather data files

use super::field_parsers::{parse_condition, parse_date, parse_measurement};
use crate::constants::{EXPECTED_FIELD_COUNT, FIELD_DELIMITER, fields};
use crate::error::{Result, WeatherError};
use crate::models::WeatherRecord;

/// Parse a single data row into a record
///
/// `line` is the 1-based line number in the source file and is only used
/// for error reporting. Trailing empty fields are dropped before counting,
/// so `a,b,c,d,e,f,` is a six-field row while `a,b,c,d,e,f, ` is not.
pub fn parse_record(row: &str, line: usize) -> Result<WeatherRecord> {
    let mut raw: Vec<&str> = row.split(FIELD_DELIMITER).collect();
    while raw.len() > 1 && raw.last().is_some_and(|field| field.is_empty()) {
        raw.pop();
    }
    let columns: Vec<&str> = raw.into_iter().map(str::trim).collect();

    let [date, condition, max_temp, rain_sum, max_wind_speed, snowfall_sum] = columns[..] else {
        return Err(WeatherError::MalformedRow {
            line,
            expected: EXPECTED_FIELD_COUNT,
            found: columns.len(),
        });
    };

    let date = parse_date(date, line)?;
    let condition = parse_condition(condition);
    let max_temp = parse_measurement(max_temp, fields::MAX_TEMP, line)?;
    let rain_sum = parse_measurement(rain_sum, fields::RAIN_SUM, line)?;
    let max_wind_speed = parse_measurement(max_wind_speed, fields::MAX_WIND_SPEED, line)?;
    let snowfall_sum = parse_measurement(snowfall_sum, fields::SNOWFALL_SUM, line)?;

    Ok(WeatherRecord::new(
        date,
        &condition,
        max_temp,
        rain_sum,
        max_wind_speed,
        snowfall_sum,
    ))
}

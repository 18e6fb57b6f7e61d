// src/export/excel_date.rs

use crate::models::record::{DATE_FORMAT, TIME_FORMAT, TIMESTAMP_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const SECONDS_PER_DAY: f64 = 86_400.0;
/// Excel serial of 1970-01-01 (day 0 is 1899-12-30).
const UNIX_EPOCH_SERIAL: f64 = 25_569.0;

/// Interpret a record field as timestamp, date or time and return the Excel
/// serial with the matching number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
        return Some(("yyyy-mm-dd hh:mm:ss", naive_datetime_to_excel_serial(&dt)));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(("yyyy-mm-dd", naive_datetime_to_excel_serial(&d.and_time(NaiveTime::MIN))));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, TIME_FORMAT) {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm:ss", seconds / SECONDS_PER_DAY));
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    dt.and_utc().timestamp() as f64 / SECONDS_PER_DAY + UNIX_EPOCH_SERIAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_serials() {
        assert_eq!(parse_to_excel_date("2025-01-01"), Some(("yyyy-mm-dd", 45658.0)));
        assert_eq!(parse_to_excel_date("12:00:00"), Some(("hh:mm:ss", 0.5)));
        let (fmt, serial) = parse_to_excel_date("2025-01-01 06:00:00").unwrap();
        assert_eq!(fmt, "yyyy-mm-dd hh:mm:ss");
        assert!((serial - 45658.25).abs() < 1e-9);
        assert_eq!(parse_to_excel_date("Ventanas"), None);
    }
}

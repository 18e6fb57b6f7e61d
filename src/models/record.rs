use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Column order of the record file and of the replicated row.
pub const HEADERS: [&str; 5] = ["timestamp", "fecha", "hora", "nombre", "punto"];

/// One check-in. Rows are only ever appended, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceRecord {
    pub timestamp: String, // ⇔ timestamp ("YYYY-MM-DD HH:MM:SS")
    #[serde(rename = "fecha")]
    pub date: String, // ⇔ fecha ("YYYY-MM-DD")
    #[serde(rename = "hora")]
    pub time: String, // ⇔ hora ("HH:MM:SS")
    #[serde(rename = "nombre")]
    pub name: String, // ⇔ nombre
    #[serde(rename = "punto")]
    pub location: String, // ⇔ punto (raw label, not normalized)
}

impl AttendanceRecord {
    /// Build a record for `now`, already expressed in the configured offset.
    pub fn at(now: DateTime<FixedOffset>, name: &str, location: &str) -> Self {
        Self {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            date: now.format(DATE_FORMAT).to_string(),
            time: now.format(TIME_FORMAT).to_string(),
            name: name.to_string(),
            location: location.to_string(),
        }
    }

    /// Wall-clock instant of the record, in the offset it was written with.
    ///
    /// Falls back to `fecha` + `hora` when `timestamp` is blank or malformed.
    pub fn instant(&self) -> Option<NaiveDateTime> {
        if let Ok(ts) = NaiveDateTime::parse_from_str(self.timestamp.trim(), TIMESTAMP_FORMAT) {
            return Some(ts);
        }

        let d = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()?;
        let t = NaiveTime::parse_from_str(self.time.trim(), TIME_FORMAT).ok()?;
        Some(d.and_time(t))
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.date.clone(),
            self.time.clone(),
            self.name.clone(),
            self.location.clone(),
        ]
    }
}

use crate::models::record::AttendanceRecord;
use crate::utils::normalize::normalize;
use std::collections::BTreeSet;

/// Headline numbers of the dashboard, always over the full record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub total: usize,
    pub unique_locations: usize,
    pub unique_people: usize,
}

pub fn metrics(records: &[AttendanceRecord]) -> Metrics {
    Metrics {
        total: records.len(),
        unique_locations: distinct(records.iter().map(|r| r.location.as_str())).len(),
        unique_people: distinct(records.iter().map(|r| r.name.as_str())).len(),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> BTreeSet<&'a str> {
    values.map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Detail table: optionally one checkpoint (matched on the normalized label),
/// newest first.
pub fn table_rows(records: &[AttendanceRecord], location: Option<&str>) -> Vec<AttendanceRecord> {
    let wanted = location.map(normalize);
    let mut rows: Vec<AttendanceRecord> = records
        .iter()
        .filter(|r| match &wanted {
            Some(w) => normalize(&r.location) == *w,
            None => true,
        })
        .cloned()
        .collect();

    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    rows
}

/// Sorted distinct names found in the records (the person filter choices).
pub fn people_in(records: &[AttendanceRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.name.as_str()))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Sorted distinct checkpoint labels found in the records.
pub fn locations_in(records: &[AttendanceRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.location.as_str()))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// "Todos" / "all" (any case) means no filter.
pub fn parse_filter(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| {
        !s.is_empty() && !s.eq_ignore_ascii_case("todos") && !s.eq_ignore_ascii_case("all")
    })
}

// src/export/model.rs

use crate::models::record::{AttendanceRecord, HEADERS};
use serde::Serialize;

/// Flat record shape for JSON / XLSX export.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub timestamp: String,
    pub fecha: String,
    pub hora: String,
    pub nombre: String,
    pub punto: String,
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            timestamp: r.timestamp.clone(),
            fecha: r.date.clone(),
            hora: r.time.clone(),
            nombre: r.name.clone(),
            punto: r.location.clone(),
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    HEADERS.to_vec()
}

pub(crate) fn record_to_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.timestamp.clone(),
        e.fecha.clone(),
        e.hora.clone(),
        e.nombre.clone(),
        e.punto.clone(),
    ]
}

//! Best-effort replication of each new row to a secondary sheet.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::record::HEADERS;
use crate::store::{DELIMITER, open_for_append};
use std::path::PathBuf;

/// Destination that receives one row per successful registration.
pub trait Replicator {
    fn name(&self) -> &str;

    /// Append `row` (same field order as the local record file).
    fn append_row(&self, row: &[String]) -> AppResult<()>;
}

/// No secondary sheet configured.
#[derive(Debug, Default)]
pub struct Disabled;

impl Replicator for Disabled {
    fn name(&self) -> &str {
        "disabled"
    }

    fn append_row(&self, _row: &[String]) -> AppResult<()> {
        Ok(())
    }
}

/// Sheet mirrored as a `;`-delimited file, typically on a synced or network
/// mount. The parent directory is never created: an unreachable mount must
/// surface as a replication failure.
#[derive(Debug)]
pub struct SheetMirror {
    path: PathBuf,
    label: String,
}

impl SheetMirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }
}

impl Replicator for SheetMirror {
    fn name(&self) -> &str {
        &self.label
    }

    fn append_row(&self, row: &[String]) -> AppResult<()> {
        let (file, needs_header) = open_for_append(&self.path)?;

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            wtr.write_record(HEADERS)?;
        }
        wtr.write_record(row)?;
        wtr.flush()?;
        Ok(())
    }
}

pub fn from_config(cfg: &Config) -> Box<dyn Replicator> {
    match cfg.mirror_path() {
        Some(path) => Box::new(SheetMirror::new(path)),
        None => Box::new(Disabled),
    }
}

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::record::{AttendanceRecord, HEADERS};
use crate::store::{DELIMITER, open_for_append};
use crate::store::replicate::Replicator;
use crate::utils::time::{now_in, offset_from_minutes};
use chrono::{DateTime, FixedOffset};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of a successful local append.
#[derive(Debug)]
pub struct AppendOutcome {
    pub record: AttendanceRecord,
    /// `Err` carries the replication failure; the local row is written anyway.
    pub replication: Result<(), String>,
}

/// Append-only attendance log (`registros.csv`).
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    offset: FixedOffset,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>, offset: FixedOffset) -> Self {
        Self {
            path: path.into(),
            offset,
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self::new(
            cfg.records_path(),
            offset_from_minutes(cfg.utc_offset_minutes)?,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        now_in(self.offset)
    }

    /// All records on disk. A missing or unreadable file yields an empty list;
    /// malformed rows are skipped.
    pub fn load(&self) -> Vec<AttendanceRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "record file unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> AppResult<Vec<AttendanceRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .flexible(true)
            .from_path(&self.path)?;

        let mut out = Vec::new();
        for (line, row) in rdr.deserialize::<AttendanceRecord>().enumerate() {
            match row {
                Ok(r) => out.push(r),
                Err(e) => debug!(row = line + 1, error = %e, "skipping malformed record"),
            }
        }
        Ok(out)
    }

    /// Create the file with its header row. Returns `false` if it already existed.
    pub fn ensure_exists(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_path(&self.path)?;
        wtr.write_record(HEADERS)?;
        wtr.flush()?;
        Ok(true)
    }

    /// Append one record stamped with the current time.
    pub fn append(
        &self,
        name: &str,
        location: &str,
        replicator: &dyn Replicator,
    ) -> AppResult<AppendOutcome> {
        self.append_at(self.now(), name, location, replicator)
    }

    /// Append one record stamped with `now`, then replicate it.
    pub fn append_at(
        &self,
        now: DateTime<FixedOffset>,
        name: &str,
        location: &str,
        replicator: &dyn Replicator,
    ) -> AppResult<AppendOutcome> {
        let record = AttendanceRecord::at(now.with_timezone(&self.offset), name, location);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let (file, needs_header) = open_for_append(&self.path)?;

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            wtr.write_record(HEADERS)?;
        }
        wtr.write_record(record.to_row())?;
        wtr.flush()?;

        debug!(name, location, timestamp = %record.timestamp, "record appended");

        let replication = replicator.append_row(&record.to_row()).map_err(|e| {
            warn!(target_sheet = replicator.name(), error = %e, "replication failed");
            e.to_string()
        });

        Ok(AppendOutcome {
            record,
            replication,
        })
    }

    /// Write a full copy of the current records to `dest`; returns the row count.
    pub fn write_copy(&self, dest: &Path) -> AppResult<usize> {
        let records = self.load();

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .from_path(dest)?;
        wtr.write_record(HEADERS)?;
        for r in &records {
            wtr.write_record(r.to_row())?;
        }
        wtr.flush()?;

        Ok(records.len())
    }
}

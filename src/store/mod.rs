//! File-backed collaborators: record log, roster, replication target and
//! per-token session flags.

pub mod records;
pub mod replicate;
pub mod roster;
pub mod session;

use crate::errors::AppResult;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

pub use records::{AppendOutcome, RecordStore};
pub use replicate::Replicator;
pub use session::SessionStore;

/// Both the record file and the roster are `;`-delimited.
pub const DELIMITER: u8 = b';';

/// Open a `;` sheet for appending rows. Returns the file and whether it still
/// needs its header row. A last line left without its terminator gets one
/// first, so the next row never lands on it.
pub(crate) fn open_for_append(path: &Path) -> AppResult<(File, bool)> {
    let mut file = OpenOptions::new()
        .read(true)
        .create(true)
        .append(true)
        .open(path)?;

    if file.metadata()?.len() == 0 {
        return Ok((file, true));
    }

    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        file.write_all(b"\n")?;
    }
    Ok((file, false))
}

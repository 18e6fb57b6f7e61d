//! Time utilities: fixed-offset clock and wait formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, FixedOffset, Utc};

/// Build the fixed offset used for every timestamp (e.g. -300 for America/Lima).
pub fn offset_from_minutes(minutes: i32) -> AppResult<FixedOffset> {
    FixedOffset::east_opt(minutes * 60).ok_or(AppError::InvalidOffset(minutes))
}

/// Current instant in the configured offset.
pub fn now_in(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Human-readable remaining wait, rounded up to whole seconds ("4m 05s").
pub fn format_wait(d: Duration) -> String {
    let secs = (d.num_milliseconds().max(0) + 999) / 1000;
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lima_offset_is_minus_five_hours() {
        let off = offset_from_minutes(-300).unwrap();
        assert_eq!(off.local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        assert!(offset_from_minutes(24 * 60 + 1).is_err());
    }

    #[test]
    fn wait_is_rounded_up() {
        assert_eq!(format_wait(Duration::milliseconds(1)), "1s");
        assert_eq!(format_wait(Duration::seconds(245)), "4m 05s");
        assert_eq!(format_wait(Duration::seconds(-3)), "0s");
    }
}

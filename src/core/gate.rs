//! Registration guards: per-person cooldown and the one-shot session flag.

use crate::models::record::AttendanceRecord;
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    Denied { remaining: Duration },
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allowed)
    }
}

/// Allow `person` unless their latest record is less than `window_minutes`
/// old. Exactly `window_minutes` is allowed; no record is allowed; a window
/// of 0 disables the check.
///
/// `now` must be wall-clock time in the same offset the records were written
/// with. This is a plain read-then-decide check with no locking.
pub fn can_register(
    records: &[AttendanceRecord],
    person: &str,
    window_minutes: i64,
    now: NaiveDateTime,
) -> GateDecision {
    if window_minutes <= 0 {
        return GateDecision::Allowed;
    }
    let person = person.trim();

    let last = records
        .iter()
        .filter(|r| r.name.trim() == person)
        .filter_map(AttendanceRecord::instant)
        .max();

    let Some(last) = last else {
        return GateDecision::Allowed;
    };

    let window = Duration::minutes(window_minutes);
    let elapsed = now - last;
    if elapsed >= window {
        GateDecision::Allowed
    } else {
        // a record stamped in the future still waits at most one window
        GateDecision::Denied {
            remaining: (window - elapsed).min(window),
        }
    }
}

/// State of one registration page session. Once a registration succeeds the
/// session is used and the page only shows the "already used" notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    used: bool,
}

impl Session {
    /// Session bound to the current invocation only.
    pub fn anonymous() -> Self {
        Self {
            token: None,
            used: false,
        }
    }

    pub fn restore(token: &str, used: bool) -> Self {
        Self {
            token: Some(token.to_string()),
            used,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn mark_used(&mut self) {
        self.used = true;
    }
}

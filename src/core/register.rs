use crate::core::gate::{GateDecision, Session, can_register};
use crate::errors::AppResult;
use crate::store::records::{AppendOutcome, RecordStore};
use crate::store::replicate::Replicator;
use chrono::{DateTime, Duration, FixedOffset};
use tracing::info;

/// What happened to a submitted registration.
#[derive(Debug)]
pub enum Registration {
    Registered(AppendOutcome),
    /// Blank selection.
    NoNameSelected,
    /// Name not among the eligible (active) people.
    NotEligible(String),
    /// This session already registered someone.
    SessionUsed,
    CoolingDown { remaining: Duration },
}

/// High-level business logic behind the registration form.
pub struct Registrar<'a> {
    store: &'a RecordStore,
    replicator: &'a dyn Replicator,
    cooldown_minutes: i64,
}

impl<'a> Registrar<'a> {
    pub fn new(store: &'a RecordStore, replicator: &'a dyn Replicator, cooldown_minutes: i64) -> Self {
        Self {
            store,
            replicator,
            cooldown_minutes,
        }
    }

    /// Register `name` at `location` now.
    pub fn submit(
        &self,
        session: &mut Session,
        eligible: &[String],
        name: &str,
        location: &str,
    ) -> AppResult<Registration> {
        self.submit_at(self.store.now(), session, eligible, name, location)
    }

    /// Register `name` at `location` at instant `now`. Rejections write nothing.
    pub fn submit_at(
        &self,
        now: DateTime<FixedOffset>,
        session: &mut Session,
        eligible: &[String],
        name: &str,
        location: &str,
    ) -> AppResult<Registration> {
        if session.is_used() {
            return Ok(Registration::SessionUsed);
        }

        let name = name.trim();
        if name.is_empty() {
            return Ok(Registration::NoNameSelected);
        }
        if !eligible.iter().any(|e| e == name) {
            return Ok(Registration::NotEligible(name.to_string()));
        }

        let records = self.store.load();
        let local_now = now.with_timezone(&self.store.offset()).naive_local();
        if let GateDecision::Denied { remaining } =
            can_register(&records, name, self.cooldown_minutes, local_now)
        {
            return Ok(Registration::CoolingDown { remaining });
        }

        let outcome = self.store.append_at(now, name, location, self.replicator)?;
        session.mark_used();
        info!(name, location, timestamp = %outcome.record.timestamp, "registration stored");

        Ok(Registration::Registered(outcome))
    }
}

//! Roster types: events merged with their An-/Abmeldungen

use chrono::{DateTime, Utc};

use super::attendance::{AttendanceRecord, InteractionType};
use super::calendar::NormalizedEvent;
use crate::errors::SeesturmError;

/// One event together with the attendance records that reference it
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub event: NormalizedEvent,
    pub registrations: Vec<AttendanceRecord>,
    pub deregistrations: Vec<AttendanceRecord>,
}

impl RosterEntry {
    pub fn id(&self) -> &str {
        &self.event.id
    }

    pub fn records(&self, interaction: InteractionType) -> &[AttendanceRecord] {
        match interaction {
            InteractionType::Registering => &self.registrations,
            InteractionType::Deregistering => &self.deregistrations,
        }
    }

    pub fn count(&self, interaction: InteractionType) -> usize {
        self.records(interaction).len()
    }

    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.event.has_started(now)
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.event.has_ended(now)
    }
}

/// Section of roster entries starting in the same month
#[derive(Debug, Clone, PartialEq)]
pub struct RosterMonth {
    pub year: i32,
    pub month: u32,
    /// Localized header, e.g. `"Juni 2025"`.
    pub label: String,
    pub entries: Vec<RosterEntry>,
}

/// Everything a roster view needs at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSnapshot {
    pub months: Vec<RosterMonth>,
    /// False until the first event fetch succeeded.
    pub events_loaded: bool,
    pub events_error: Option<SeesturmError>,
    pub attendance_error: Option<SeesturmError>,
    pub generated_at: DateTime<Utc>,
}

impl RosterSnapshot {
    pub fn entries(&self) -> impl Iterator<Item = &RosterEntry> {
        self.months.iter().flat_map(|month| month.entries.iter())
    }

    pub fn entry(&self, event_id: &str) -> Option<&RosterEntry> {
        self.entries().find(|entry| entry.id() == event_id)
    }
}

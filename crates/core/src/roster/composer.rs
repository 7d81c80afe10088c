//! Roster state holder
//!
//! Keeps the latest successful input of each source and re-derives the full
//! [`RosterSnapshot`] on demand. Every `apply_*` call replaces the previous
//! value wholesale.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use seesturm_domain::{AttendanceDocument, NormalizedEvent, RosterSnapshot, Result, SeesturmError};
use tracing::{debug, warn};

use super::ports::AttendanceUpdate;
use super::reconciler::{group_by_month, reconcile, upcoming};
use super::records::to_records;

#[derive(Debug, Clone)]
pub struct RosterComposer {
    display_tz: Tz,
    selected_date: DateTime<Utc>,
    events: Option<Vec<NormalizedEvent>>,
    attendance: Vec<AttendanceDocument>,
    events_error: Option<SeesturmError>,
    attendance_error: Option<SeesturmError>,
}

impl RosterComposer {
    pub fn new(display_tz: Tz, selected_date: DateTime<Utc>) -> Self {
        Self {
            display_tz,
            selected_date,
            events: None,
            attendance: Vec::new(),
            events_error: None,
            attendance_error: None,
        }
    }

    pub fn selected_date(&self) -> DateTime<Utc> {
        self.selected_date
    }

    pub fn select_date(&mut self, selected_date: DateTime<Utc>) {
        self.selected_date = selected_date;
    }

    /// Apply the result of an event fetch.
    ///
    /// Errors keep the previous events; `Cancelled` is ignored entirely.
    /// Returns whether anything changed.
    pub fn apply_events(&mut self, result: Result<Vec<NormalizedEvent>>) -> bool {
        match result {
            Ok(events) => {
                debug!(count = events.len(), "roster events replaced");
                self.events = Some(events);
                self.events_error = None;
                true
            }
            Err(SeesturmError::Cancelled) => false,
            Err(error) => {
                warn!(error = %error, kind = error.label(), "event fetch failed, keeping previous events");
                self.events_error = Some(error);
                true
            }
        }
    }

    /// Apply one attendance emission. Errors keep the previous list.
    pub fn apply_attendance(&mut self, update: AttendanceUpdate) {
        match update {
            Ok(documents) => {
                debug!(count = documents.len(), "roster attendance replaced");
                self.attendance = documents;
                self.attendance_error = None;
            }
            Err(error) => {
                warn!(error = %error, kind = error.label(), "attendance update failed, keeping previous list");
                self.attendance_error = Some(error);
            }
        }
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> RosterSnapshot {
        let events = self.events.as_deref().unwrap_or_default();
        let records = to_records(&self.attendance, self.display_tz, now);
        let entries = upcoming(reconcile(events, &records), self.selected_date);

        RosterSnapshot {
            months: group_by_month(entries, self.display_tz),
            events_loaded: self.events.is_some(),
            events_error: self.events_error.clone(),
            attendance_error: self.attendance_error.clone(),
            generated_at: now,
        }
    }
}

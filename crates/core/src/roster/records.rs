//! Attendance documents to display records

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use seesturm_domain::{AttendanceDocument, AttendanceRecord};
use tracing::warn;

use crate::events::format::relative_date_time;

pub fn to_record(document: &AttendanceDocument, display_tz: Tz, now: DateTime<Utc>) -> AttendanceRecord {
    let created = document.created.with_timezone(&display_tz);
    AttendanceRecord {
        id: document.id.clone(),
        event_id: document.event_id.trim().to_string(),
        stufe: document.stufe,
        interaction: document.interaction,
        display_name: document.display_name(),
        created_string: relative_date_time(&created, now),
        created,
        remark: document
            .bemerkung
            .as_deref()
            .map(str::trim)
            .filter(|remark| !remark.is_empty())
            .map(str::to_string),
    }
}

/// Convert a full attendance snapshot.
///
/// Documents without an event id cannot belong to any roster and are dropped.
pub fn to_records(
    documents: &[AttendanceDocument],
    display_tz: Tz,
    now: DateTime<Utc>,
) -> Vec<AttendanceRecord> {
    documents
        .iter()
        .filter(|document| {
            let keep = !document.event_id.trim().is_empty();
            if !keep {
                warn!(document_id = %document.id, "attendance document without event id dropped");
            }
            keep
        })
        .map(|document| to_record(document, display_tz, now))
        .collect()
}

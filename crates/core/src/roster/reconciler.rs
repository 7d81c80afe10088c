//! Pure merge of normalized events with attendance records
//!
//! Every function here is a pure function of its inputs; callers re-derive
//! the whole roster whenever either input changes.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use seesturm_domain::{
    AttendanceRecord, InteractionType, NormalizedEvent, RosterEntry, RosterMonth,
};

use crate::events::format::month_label;

/// Pair each event with its records, partitioned by interaction type.
///
/// Event order is preserved and records within a partition are ordered by
/// creation time. Records referencing unknown events are ignored.
pub fn reconcile(events: &[NormalizedEvent], attendance: &[AttendanceRecord]) -> Vec<RosterEntry> {
    let mut by_event: HashMap<&str, Vec<&AttendanceRecord>> = HashMap::new();
    for record in attendance {
        by_event.entry(record.event_id.as_str()).or_default().push(record);
    }

    events
        .iter()
        .map(|event| {
            let records = by_event.get(event.id.as_str()).map(Vec::as_slice).unwrap_or_default();
            RosterEntry {
                event: event.clone(),
                registrations: partition(records, InteractionType::Registering),
                deregistrations: partition(records, InteractionType::Deregistering),
            }
        })
        .collect()
}

/// Entries that have not ended before `selected_date`, latest start first.
pub fn upcoming(entries: Vec<RosterEntry>, selected_date: DateTime<Utc>) -> Vec<RosterEntry> {
    let mut entries: Vec<_> = entries
        .into_iter()
        .filter(|entry| entry.event.end.with_timezone(&Utc) >= selected_date)
        .collect();
    entries.sort_by_key(|entry| Reverse(entry.event.start));
    entries
}

/// Section entries by (year, month) of their start in `tz`, newest month
/// first. Order within a month is kept.
pub fn group_by_month(entries: Vec<RosterEntry>, tz: Tz) -> Vec<RosterMonth> {
    let mut months: BTreeMap<Reverse<(i32, u32)>, RosterMonth> = BTreeMap::new();
    for entry in entries {
        let start = entry.event.start.with_timezone(&tz);
        months
            .entry(Reverse((start.year(), start.month())))
            .or_insert_with(|| RosterMonth {
                year: start.year(),
                month: start.month(),
                label: month_label(&start),
                entries: Vec::new(),
            })
            .entries
            .push(entry);
    }
    months.into_values().collect()
}

fn partition(records: &[&AttendanceRecord], interaction: InteractionType) -> Vec<AttendanceRecord> {
    let mut matching: Vec<AttendanceRecord> = records
        .iter()
        .filter(|record| record.interaction == interaction)
        .map(|record| (*record).clone())
        .collect();
    matching.sort_by_key(|record| record.created);
    matching
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::Europe::Zurich;
    use seesturm_domain::{RawCalendarEvent, RawEventDateTime, Stufe};

    use super::*;
    use crate::events::{normalize_event, NormalizeContext};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
    }

    fn event(id: &str, start: &str, end: &str) -> NormalizedEvent {
        let raw = RawCalendarEvent {
            id: id.into(),
            summary: Some(format!("Aktivität {id}")),
            description: None,
            location: None,
            created: "2025-05-01T08:00:00Z".into(),
            updated: "2025-05-01T08:00:00Z".into(),
            start: RawEventDateTime::timed(start),
            end: RawEventDateTime::timed(end),
        };
        normalize_event(&raw, &NormalizeContext::new(Zurich, now())).unwrap()
    }

    fn record(id: &str, event_id: &str, interaction: InteractionType, minute: u32) -> AttendanceRecord {
        let created = Zurich.with_ymd_and_hms(2025, 5, 30, 12, minute, 0).unwrap();
        AttendanceRecord {
            id: id.into(),
            event_id: event_id.into(),
            stufe: Stufe::Wolf,
            interaction,
            display_name: format!("Person {id}"),
            created,
            created_string: String::new(),
            remark: None,
        }
    }

    fn ids(records: &[AttendanceRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn groups_records_per_event_without_leaking() {
        let events = vec![
            event("A", "2025-06-07T14:00:00+02:00", "2025-06-07T17:00:00+02:00"),
            event("B", "2025-06-14T14:00:00+02:00", "2025-06-14T17:00:00+02:00"),
        ];
        let attendance = vec![
            record("1", "A", InteractionType::Registering, 0),
            record("2", "A", InteractionType::Deregistering, 1),
            record("3", "B", InteractionType::Registering, 2),
        ];

        let roster = reconcile(&events, &attendance);

        assert_eq!(roster.len(), 2);
        assert_eq!(ids(&roster[0].registrations), ["1"]);
        assert_eq!(ids(&roster[0].deregistrations), ["2"]);
        assert_eq!(ids(&roster[1].registrations), ["3"]);
        assert!(roster[1].deregistrations.is_empty());
    }

    #[test]
    fn reconcile_is_pure() {
        let events = vec![event("A", "2025-06-07T14:00:00+02:00", "2025-06-07T17:00:00+02:00")];
        let attendance = vec![
            record("2", "A", InteractionType::Registering, 5),
            record("1", "A", InteractionType::Registering, 1),
            record("x", "unknown", InteractionType::Registering, 3),
        ];
        let first = reconcile(&events, &attendance);
        assert_eq!(first, reconcile(&events, &attendance));
        assert_eq!(ids(&first[0].registrations), ["1", "2"]);
    }

    #[test]
    fn upcoming_filters_by_end_and_sorts_descending() {
        let entries = reconcile(
            &[
                event("past", "2025-05-24T14:00:00+02:00", "2025-05-24T17:00:00+02:00"),
                event("early", "2025-06-07T14:00:00+02:00", "2025-06-07T17:00:00+02:00"),
                event("late", "2025-07-05T14:00:00+02:00", "2025-07-05T17:00:00+02:00"),
                event("running", "2025-05-31T10:00:00+02:00", "2025-06-01T12:00:00+02:00"),
            ],
            &[],
        );

        let result = upcoming(entries, now());
        let order: Vec<&str> = result.iter().map(RosterEntry::id).collect();
        assert_eq!(order, ["late", "early", "running"]);
    }

    #[test]
    fn groups_by_month_in_display_zone() {
        let entries = upcoming(
            reconcile(
                &[
                    event("june", "2025-06-07T14:00:00+02:00", "2025-06-07T17:00:00+02:00"),
                    // 22:30 UTC on June 30 is already July in Zurich.
                    event("july", "2025-06-30T22:30:00Z", "2025-06-30T23:30:00Z"),
                    event("june2", "2025-06-21T14:00:00+02:00", "2025-06-21T17:00:00+02:00"),
                ],
                &[],
            ),
            now(),
        );

        let months = group_by_month(entries, Zurich);
        assert_eq!(months.len(), 2);
        assert_eq!((months[0].year, months[0].month), (2025, 7));
        assert_eq!(months[0].label, "Juli 2025");
        assert_eq!(months[1].label, "Juni 2025");
        let june: Vec<&str> = months[1].entries.iter().map(RosterEntry::id).collect();
        assert_eq!(june, ["june2", "june"]);
    }

    #[test]
    fn started_and_ended_flags() {
        let entry = &reconcile(
            &[event("A", "2025-06-01T11:00:00+02:00", "2025-06-01T13:00:00+02:00")],
            &[],
        )[0];
        assert!(!entry.has_started(now()));
        assert!(entry.has_started(Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()));
        assert!(!entry.has_ended(Utc.with_ymd_and_hms(2025, 6, 1, 10, 59, 59).unwrap()));
        assert!(entry.has_ended(Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap()));
    }
}

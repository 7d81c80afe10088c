use chrono::{DateTime, TimeZone, Utc};
use seesturm_domain::{
    AttendanceDocument, InteractionType, RawCalendarEvent, RawEventDateTime, RawEventsPage, Stufe,
};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
}

pub fn raw_event(id: &str, start: &str, end: &str) -> RawCalendarEvent {
    RawCalendarEvent {
        id: id.into(),
        summary: Some(format!("Aktivität {id}")),
        description: Some("Treffpunkt beim Pfadiheim".into()),
        location: Some("Pfadiheim Seesturm".into()),
        created: "2025-05-01T08:00:00.000Z".into(),
        updated: "2025-05-02T08:00:00.000Z".into(),
        start: RawEventDateTime::timed(start),
        end: RawEventDateTime::timed(end),
    }
}

/// Saturday afternoon activity on the given June 2025 day.
pub fn saturday(id: &str, day: u32) -> RawCalendarEvent {
    raw_event(
        id,
        &format!("2025-06-{day:02}T14:00:00+02:00"),
        &format!("2025-06-{day:02}T17:00:00+02:00"),
    )
}

pub fn page(items: Vec<RawCalendarEvent>, next_page_token: Option<&str>) -> RawEventsPage {
    RawEventsPage {
        items,
        next_page_token: next_page_token.map(str::to_string),
        time_zone: "Europe/Zurich".into(),
        updated: "2025-05-31T12:00:00.000Z".into(),
    }
}

pub fn document(id: &str, event_id: &str, interaction: InteractionType) -> AttendanceDocument {
    AttendanceDocument {
        id: id.into(),
        event_id: event_id.into(),
        stufe: Stufe::Wolf,
        vorname: "Noah".into(),
        nachname: "Meier".into(),
        pfadiname: Some("Dachs".into()),
        bemerkung: None,
        interaction,
        created: Utc.with_ymd_and_hms(2025, 5, 30, 18, 0, 0).unwrap(),
    }
}

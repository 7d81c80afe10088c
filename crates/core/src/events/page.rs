//! Whole-page transformation of `events.list` responses

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use seesturm_domain::{parse_time_zone, DateError, NormalizedEventsPage, RawEventsPage};
use tracing::debug;

use super::normalizer::{normalize_event, parse_instant, NormalizeContext};

/// Normalize every event of a page, or none of them.
///
/// The calendar-level time zone is checked before any event is touched; an
/// unknown identifier rejects the entire page.
///
/// # Errors
/// Returns the first [`DateError`] encountered.
pub fn transform_events_page(
    page: &RawEventsPage,
    display_tz: Tz,
    now: DateTime<Utc>,
) -> Result<NormalizedEventsPage, DateError> {
    let source_tz = parse_time_zone(&page.time_zone)?;
    let ctx = NormalizeContext::new(source_tz, now).with_display_tz(display_tz);

    let events = page
        .items
        .iter()
        .map(|raw| normalize_event(raw, &ctx))
        .collect::<Result<Vec<_>, _>>()?;
    let updated = parse_instant(&page.updated)?;

    debug!(count = events.len(), time_zone = %source_tz, has_next = page.next_page_token.is_some(), "transformed events page");

    Ok(NormalizedEventsPage {
        events,
        next_page_token: page.next_page_token.clone(),
        time_zone: source_tz,
        updated,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::Europe::Zurich;
    use seesturm_domain::{RawCalendarEvent, RawEventDateTime};

    use super::*;

    fn item(id: &str, start: &str, end: &str) -> RawCalendarEvent {
        RawCalendarEvent {
            id: id.into(),
            summary: Some(format!("Anlass {id}")),
            description: None,
            location: None,
            created: "2025-05-01T08:00:00.000Z".into(),
            updated: "2025-05-01T08:00:00.000Z".into(),
            start: RawEventDateTime::floating(start),
            end: RawEventDateTime::floating(end),
        }
    }

    fn page(time_zone: &str, items: Vec<RawCalendarEvent>) -> RawEventsPage {
        RawEventsPage {
            items,
            next_page_token: Some("next".into()),
            time_zone: time_zone.into(),
            updated: "2025-05-21T07:00:00.000Z".into(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 21, 8, 0, 0).unwrap()
    }

    #[test]
    fn transforms_all_items_in_order() {
        let page = page(
            "Europe/Zurich",
            vec![item("a", "2025-06-01", "2025-06-02"), item("b", "2025-06-08", "2025-06-09")],
        );
        let result = transform_events_page(&page, Zurich, now()).unwrap();

        assert_eq!(result.events.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(result.next_page_token.as_deref(), Some("next"));
        assert_eq!(result.time_zone, Zurich);
        assert_eq!(result.updated, Utc.with_ymd_and_hms(2025, 5, 21, 7, 0, 0).unwrap());
    }

    #[test]
    fn invalid_calendar_zone_rejects_whole_page() {
        let page = page("Not/ARealZone", vec![item("a", "2025-06-01", "2025-06-02")]);
        assert_eq!(
            transform_events_page(&page, Zurich, now()),
            Err(DateError::InvalidTimeZone("Not/ARealZone".into()))
        );
    }

    #[test]
    fn one_bad_event_fails_the_page() {
        let page = page(
            "Europe/Zurich",
            vec![item("a", "2025-06-01", "2025-06-02"), item("b", "2025-13-40", "2025-06-09")],
        );
        assert!(matches!(
            transform_events_page(&page, Zurich, now()),
            Err(DateError::Malformed { .. })
        ));
    }

    #[test]
    fn empty_page_is_fine() {
        let result = transform_events_page(&page("UTC", Vec::new()), Zurich, now()).unwrap();
        assert!(result.events.is_empty());
    }
}

//! Raw Google Calendar events to display-ready [`NormalizedEvent`]s

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use seesturm_domain::constants::{DISPLAY_TIME_ZONE, UNTITLED_EVENT_TITLE};
use seesturm_domain::{DateError, NormalizedEvent, RawCalendarEvent, RawEventDateTime};
use tracing::warn;

use super::format;

/// Time zones and evaluation instant for one normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeContext {
    /// Zone of the calendar, used for floating dates.
    pub source_tz: Tz,
    pub display_tz: Tz,
    /// Reference for relative created/modified strings.
    pub now: DateTime<Utc>,
}

impl NormalizeContext {
    /// Context displaying in Europe/Zurich.
    pub fn new(source_tz: Tz, now: DateTime<Utc>) -> Self {
        Self { source_tz, display_tz: DISPLAY_TIME_ZONE, now }
    }

    pub fn with_display_tz(mut self, display_tz: Tz) -> Self {
        self.display_tz = display_tz;
        self
    }
}

/// Normalize a single raw event.
///
/// All-day events have their exclusive end date moved back by one calendar
/// day. An end that still lies before the start is clamped to the start.
///
/// # Errors
/// Returns a [`DateError`] if an endpoint is missing, a timestamp or date is
/// malformed, or a floating date cannot be resolved in the source zone.
pub fn normalize_event(
    raw: &RawCalendarEvent,
    ctx: &NormalizeContext,
) -> Result<NormalizedEvent, DateError> {
    if !has_date(&raw.start) || !has_date(&raw.end) {
        return Err(DateError::MissingEventDate { event_id: raw.id.clone() });
    }

    let is_all_day = raw.start.date_time.is_none();
    let start = resolve_endpoint(&raw.start, ctx.source_tz, false, &raw.id)?
        .with_timezone(&ctx.display_tz);
    let mut end = resolve_endpoint(&raw.end, ctx.source_tz, is_all_day, &raw.id)?
        .with_timezone(&ctx.display_tz);

    if end < start {
        warn!(event_id = %raw.id, %start, %end, "event ends before it starts, clamping end to start");
        end = start;
    }

    let created = parse_instant(&raw.created)?.with_timezone(&ctx.display_tz);
    let modified = parse_instant(&raw.updated)?.with_timezone(&ctx.display_tz);

    Ok(NormalizedEvent {
        id: raw.id.clone(),
        title: non_blank(raw.summary.as_deref())
            .unwrap_or_else(|| UNTITLED_EVENT_TITLE.to_string()),
        description: non_blank(raw.description.as_deref()),
        location: non_blank(raw.location.as_deref()),
        created_string: format::relative_date_time(&created, ctx.now),
        modified_string: format::relative_date_time(&modified, ctx.now),
        created,
        modified,
        is_all_day,
        day_of_month: format::day_of_month(&start),
        month_abbreviation: format::month_abbreviation(&start),
        full_date_string: format::full_date_string(&start, &end),
        time_string: format::time_string(&start, &end, is_all_day),
        date_time_string: format::date_time_string(&start, &end, is_all_day),
        start,
        end,
    })
}

/// Parse an absolute ISO-8601 instant with any offset and optional
/// fractional seconds.
///
/// # Errors
/// Returns [`DateError::Malformed`] if `value` is not RFC 3339.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, DateError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| DateError::Malformed { value: value.to_string(), reason: e.to_string() })
}

/// Resolve a floating `YYYY-MM-DD` date to local midnight in `tz`.
///
/// Ambiguous midnights resolve to the earlier instant.
///
/// # Errors
/// Returns [`DateError::Malformed`] for an unparsable date and
/// [`DateError::NonexistentLocalTime`] if midnight is skipped in `tz`.
pub fn resolve_floating_date(value: &str, tz: Tz) -> Result<DateTime<Tz>, DateError> {
    let date = parse_date(value)?;
    midnight(date, tz)
}

fn resolve_endpoint(
    endpoint: &RawEventDateTime,
    source_tz: Tz,
    exclusive_end: bool,
    event_id: &str,
) -> Result<DateTime<Tz>, DateError> {
    if let Some(date_time) = endpoint.date_time.as_deref() {
        return parse_instant(date_time).map(|instant| instant.with_timezone(&source_tz));
    }

    let value = endpoint
        .date
        .as_deref()
        .ok_or_else(|| DateError::MissingEventDate { event_id: event_id.to_string() })?;
    let date = parse_date(value)?;
    let date = if exclusive_end { inclusive_end_date(date, event_id)? } else { date };
    midnight(date, source_tz)
}

fn inclusive_end_date(date: NaiveDate, event_id: &str) -> Result<NaiveDate, DateError> {
    date.pred_opt().ok_or_else(|| DateError::CalendarArithmetic { event_id: event_id.to_string() })
}

fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| DateError::Malformed { value: value.to_string(), reason: e.to_string() })
}

fn midnight(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>, DateError> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN)).earliest().ok_or_else(|| {
        DateError::NonexistentLocalTime { date: date.to_string(), time_zone: tz.name().to_string() }
    })
}

fn has_date(endpoint: &RawEventDateTime) -> bool {
    endpoint.date_time.is_some() || endpoint.date.is_some()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

//! Calendar event types
//!
//! `Raw*` types mirror the Google Calendar v3 JSON exactly and are only ever
//! deserialized. [`NormalizedEvent`] is the display-ready result of the
//! normalizer and is recomputed wholesale on every fetch.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// One endpoint (`start` or `end`) of a raw calendar event.
///
/// Google sends either `dateTime` (timed) or `date` (floating, all-day).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventDateTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl RawEventDateTime {
    /// Timed endpoint from an ISO-8601 date-time string.
    pub fn timed(date_time: impl Into<String>) -> Self {
        Self { date_time: Some(date_time.into()), ..Self::default() }
    }

    /// Floating endpoint from a `YYYY-MM-DD` date string.
    pub fn floating(date: impl Into<String>) -> Self {
        Self { date: Some(date.into()), ..Self::default() }
    }
}

/// Calendar event as returned by the Google Calendar API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCalendarEvent {
    pub id: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub created: String,
    pub updated: String,
    #[serde(default)]
    pub start: RawEventDateTime,
    #[serde(default)]
    pub end: RawEventDateTime,
}

/// One page of an `events.list` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventsPage {
    #[serde(default)]
    pub items: Vec<RawCalendarEvent>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    /// Calendar-level IANA zone used to interpret floating dates.
    #[serde(default)]
    pub time_zone: String,
    pub updated: String,
}

/// Fully resolved, display-ready calendar event.
///
/// Instants are held in the display time zone. `end` is never before
/// `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created: DateTime<Tz>,
    pub modified: DateTime<Tz>,
    pub created_string: String,
    pub modified_string: String,
    pub is_all_day: bool,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    /// Day of month of `start`, e.g. `"7"`.
    pub day_of_month: String,
    /// Localized month abbreviation of `start`.
    pub month_abbreviation: String,
    pub full_date_string: String,
    pub time_string: String,
    pub date_time_string: String,
}

impl NormalizedEvent {
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        now >= self.start.with_timezone(&Utc)
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now >= self.end.with_timezone(&Utc)
    }
}

/// Result of transforming one [`RawEventsPage`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEventsPage {
    pub events: Vec<NormalizedEvent>,
    pub next_page_token: Option<String>,
    pub time_zone: Tz,
    pub updated: DateTime<Utc>,
}

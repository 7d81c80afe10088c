//! Calendar data source port

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use seesturm_domain::{RawCalendarEvent, RawEventsPage, Result};

/// Parameters of one `events.list` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsQuery {
    /// Lower bound on event end times.
    pub time_min: DateTime<Utc>,
    pub page_token: Option<String>,
    pub max_results: u32,
}

impl EventsQuery {
    pub fn new(time_min: DateTime<Utc>, max_results: u32) -> Self {
        Self { time_min, page_token: None, max_results }
    }

    pub fn with_page_token(mut self, page_token: Option<String>) -> Self {
        self.page_token = page_token;
        self
    }
}

/// Trait for reading raw events from a remote calendar
#[async_trait]
pub trait CalendarEventsSource: Send + Sync {
    /// Fetch one page of events of `calendar_id`
    async fn fetch_calendar_events(
        &self,
        calendar_id: &str,
        query: &EventsQuery,
    ) -> Result<RawEventsPage>;

    /// Fetch a single event by id
    async fn fetch_single_calendar_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<RawCalendarEvent>;
}

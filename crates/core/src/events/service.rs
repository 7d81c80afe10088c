//! Calendar service - fetches and normalizes events through a
//! [`CalendarEventsSource`]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use seesturm_common::Clock;
use seesturm_domain::constants::{DEFAULT_MAX_PAGES, DEFAULT_MAX_RESULTS, DISPLAY_TIME_ZONE};
use seesturm_domain::{
    parse_time_zone, CalendarConfig, NormalizedEvent, NormalizedEventsPage, Result,
};
use tracing::{debug, instrument, warn};

use super::normalizer::{normalize_event, NormalizeContext};
use super::page::transform_events_page;
use super::ports::{CalendarEventsSource, EventsQuery};

/// Normalizing front of a calendar source
pub struct CalendarService {
    source: Arc<dyn CalendarEventsSource>,
    clock: Arc<dyn Clock>,
    display_tz: Tz,
    max_results: u32,
    max_pages: u32,
}

impl CalendarService {
    /// Create a service displaying in Europe/Zurich with default page limits
    pub fn new(source: Arc<dyn CalendarEventsSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            display_tz: DISPLAY_TIME_ZONE,
            max_results: DEFAULT_MAX_RESULTS,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Create a service from calendar configuration
    ///
    /// # Errors
    /// Returns a `Config` error if the display time zone is unknown.
    pub fn from_config(
        source: Arc<dyn CalendarEventsSource>,
        clock: Arc<dyn Clock>,
        config: &CalendarConfig,
    ) -> Result<Self> {
        Ok(Self::new(source, clock)
            .with_display_tz(config.display_tz()?)
            .with_page_limits(config.max_results, config.max_pages))
    }

    pub fn with_display_tz(mut self, display_tz: Tz) -> Self {
        self.display_tz = display_tz;
        self
    }

    pub fn with_page_limits(mut self, max_results: u32, max_pages: u32) -> Self {
        self.max_results = max_results.max(1);
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn display_tz(&self) -> Tz {
        self.display_tz
    }

    /// Fetch and normalize one page.
    ///
    /// # Errors
    /// Source errors are passed through; a date error anywhere on the page
    /// fails the whole page.
    #[instrument(skip(self))]
    pub async fn fetch_page(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        page_token: Option<String>,
    ) -> Result<NormalizedEventsPage> {
        let query = EventsQuery::new(time_min, self.max_results).with_page_token(page_token);
        let raw = self.source.fetch_calendar_events(calendar_id, &query).await?;
        Ok(transform_events_page(&raw, self.display_tz, self.clock.now())?)
    }

    /// Fetch all pages starting at `time_min`, up to the configured page limit.
    ///
    /// # Errors
    /// Fails if any page fails; no partial list is returned.
    #[instrument(skip(self))]
    pub async fn fetch_all(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
    ) -> Result<Vec<NormalizedEvent>> {
        let mut events = Vec::new();
        let mut page_token = None;

        for page_number in 1..=self.max_pages {
            let page = self.fetch_page(calendar_id, time_min, page_token).await?;
            events.extend(page.events);
            page_token = page.next_page_token;

            if page_token.is_none() {
                debug!(pages = page_number, count = events.len(), "fetched all events");
                return Ok(events);
            }
        }

        warn!(max_pages = self.max_pages, count = events.len(), "page limit reached, remaining events skipped");
        Ok(events)
    }

    /// Fetch and normalize a single event.
    ///
    /// Floating dates are read in the event's own `timeZone` when present,
    /// otherwise in the display zone.
    ///
    /// # Errors
    /// Source errors are passed through; date errors become
    /// `SeesturmError::Date`.
    #[instrument(skip(self))]
    pub async fn fetch_event(&self, calendar_id: &str, event_id: &str) -> Result<NormalizedEvent> {
        let raw = self.source.fetch_single_calendar_event(calendar_id, event_id).await?;

        let source_tz = match raw.start.time_zone.as_deref().or(raw.end.time_zone.as_deref()) {
            Some(name) => parse_time_zone(name)?,
            None => self.display_tz,
        };
        let ctx = NormalizeContext::new(source_tz, self.clock.now()).with_display_tz(self.display_tz);
        Ok(normalize_event(&raw, &ctx)?)
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use seesturm_core::{CalendarEventsSource, EventsQuery};
use seesturm_domain::{RawCalendarEvent, RawEventsPage, Result as DomainResult, SeesturmError};
use tokio::sync::Semaphore;

#[derive(Default)]
struct State {
    pages: HashMap<Option<String>, DomainResult<RawEventsPage>>,
    events: HashMap<String, RawCalendarEvent>,
    queries: Vec<(String, EventsQuery)>,
    started: usize,
    in_flight: usize,
}

/// In-memory mock for `CalendarEventsSource`.
///
/// Pages are keyed by the page token they answer. A gated mock blocks every
/// list request until the test hands out permits with [`Self::release`].
#[derive(Default, Clone)]
pub struct MockCalendarSource {
    state: Arc<Mutex<State>>,
    gate: Option<Arc<Semaphore>>,
}

impl MockCalendarSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self { gate: Some(Arc::new(Semaphore::new(0))), ..Self::default() }
    }

    pub fn with_page(self, token: Option<&str>, page: DomainResult<RawEventsPage>) -> Self {
        self.set_page(token, page);
        self
    }

    pub fn with_event(self, event: RawCalendarEvent) -> Self {
        self.state.lock().events.insert(event.id.clone(), event);
        self
    }

    pub fn set_page(&self, token: Option<&str>, page: DomainResult<RawEventsPage>) {
        self.state.lock().pages.insert(token.map(str::to_string), page);
    }

    pub fn release(&self, permits: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(permits);
        }
    }

    pub fn queries(&self) -> Vec<(String, EventsQuery)> {
        self.state.lock().queries.clone()
    }

    pub fn started(&self) -> usize {
        self.state.lock().started
    }

    pub fn in_flight(&self) -> usize {
        self.state.lock().in_flight
    }
}

struct InFlight(Arc<Mutex<State>>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.lock().in_flight -= 1;
    }
}

#[async_trait]
impl CalendarEventsSource for MockCalendarSource {
    async fn fetch_calendar_events(
        &self,
        calendar_id: &str,
        query: &EventsQuery,
    ) -> DomainResult<RawEventsPage> {
        {
            let mut state = self.state.lock();
            state.queries.push((calendar_id.to_string(), query.clone()));
            state.started += 1;
            state.in_flight += 1;
        }
        let _guard = InFlight(Arc::clone(&self.state));

        if let Some(gate) = &self.gate {
            gate.acquire().await.map_err(|e| SeesturmError::Internal(e.to_string()))?.forget();
        }

        // Release the lock before `_guard` drops and takes it again.
        let page = self.state.lock().pages.get(&query.page_token).cloned();
        page.unwrap_or_else(|| Err(SeesturmError::NotFound(format!("page {:?}", query.page_token))))
    }

    async fn fetch_single_calendar_event(
        &self,
        _calendar_id: &str,
        event_id: &str,
    ) -> DomainResult<RawCalendarEvent> {
        self.state
            .lock()
            .events
            .get(event_id)
            .cloned()
            .ok_or_else(|| SeesturmError::NotFound(event_id.to_string()))
    }
}

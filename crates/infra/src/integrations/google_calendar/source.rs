//! [`CalendarEventsSource`] backed by the Google Calendar API
//!
//! Requests are authenticated with an API key; the Seesturm calendars are
//! public and read-only from this side.

use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::{Method, Response};
use seesturm_core::{CalendarEventsSource, EventsQuery};
use seesturm_domain::{CalendarConfig, RawCalendarEvent, RawEventsPage, Result, SeesturmError};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::types::GoogleErrorBody;
use crate::errors::{status_error, InfraError};
use crate::http::HttpClient;

/// Google Calendar source
pub struct GoogleCalendarSource {
    http: HttpClient,
    base_url: Url,
    api_key: String,
}

impl GoogleCalendarSource {
    /// # Errors
    /// Returns `SeesturmError::Config` if `base_url` is not an absolute URL.
    pub fn new(http: HttpClient, base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| SeesturmError::Config(format!("Invalid calendar API base URL '{base_url}': {e}")))?;
        Ok(Self { http, base_url, api_key: api_key.into() })
    }

    /// Source with a default retrying HTTP client.
    ///
    /// # Errors
    /// Returns `SeesturmError::Config` for an invalid base URL, or the HTTP
    /// client's build error.
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        Self::new(HttpClient::new()?, &config.api_base_url, config.api_key.clone())
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut path = self.base_url.path().trim_end_matches('/').to_string();
        for segment in segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        let mut url = self.base_url.clone();
        url.set_path(&path);
        url
    }

    fn events_url(&self, calendar_id: &str) -> Url {
        self.url(&["calendars", calendar_id, "events"])
    }
}

#[async_trait]
impl CalendarEventsSource for GoogleCalendarSource {
    #[instrument(skip(self, query), fields(page_token = ?query.page_token))]
    async fn fetch_calendar_events(
        &self,
        calendar_id: &str,
        query: &EventsQuery,
    ) -> Result<RawEventsPage> {
        let mut params = vec![
            ("key", self.api_key.clone()),
            ("timeMin", query.time_min.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ("singleEvents", "true".to_string()),
            ("orderBy", "startTime".to_string()),
            ("maxResults", query.max_results.to_string()),
        ];
        if let Some(token) = &query.page_token {
            params.push(("pageToken", token.clone()));
        }

        let request = self.http.request(Method::GET, self.events_url(calendar_id)).query(&params);
        let page: RawEventsPage = read_json(self.http.send(request).await?).await?;
        debug!(count = page.items.len(), has_next = page.next_page_token.is_some(), "fetched events page");
        Ok(page)
    }

    #[instrument(skip(self))]
    async fn fetch_single_calendar_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<RawCalendarEvent> {
        let url = self.url(&["calendars", calendar_id, "events", event_id]);
        let request = self.http.request(Method::GET, url).query(&[("key", self.api_key.as_str())]);
        read_json(self.http.send(request).await?).await
    }
}

/// Decode a success body, or map the Google error envelope to a domain
/// error.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await.map_err(InfraError::from)?;

    if !status.is_success() {
        let detail = serde_json::from_slice::<GoogleErrorBody>(&body)
            .map(|envelope| envelope.detail())
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).trim().to_string());
        warn!(%status, detail = %detail, "Google Calendar API error");
        return Err(status_error(status, &detail));
    }

    serde_json::from_slice(&body).map_err(|e| InfraError::from(e).into())
}

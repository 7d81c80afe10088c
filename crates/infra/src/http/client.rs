//! Retrying HTTP client for the remote calendar API

use std::time::Duration;

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, IntoUrl, Method, RequestBuilder, Response, StatusCode};
use seesturm_domain::{Result, SeesturmError};
use tracing::{debug, warn};

use crate::errors::InfraError;

const DEFAULT_USER_AGENT: &str = concat!("seesturm/", env!("CARGO_PKG_VERSION"));

/// How often and how patiently a request is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included. Never zero.
    pub max_attempts: usize,
    pub base_backoff: Duration,
    /// Upper bound for any single wait, `Retry-After` included.
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Wait before retry number `retry` (1-based): the base backoff doubled
    /// per retry, or the server's `Retry-After` if that is longer.
    pub fn delay(&self, retry: usize, retry_after: Option<Duration>) -> Duration {
        let exponent = u32::try_from(retry.saturating_sub(1)).unwrap_or(u32::MAX).min(8);
        let backoff = self.base_backoff.saturating_mul(1 << exponent);
        retry_after.map_or(backoff, |hint| hint.max(backoff)).min(self.max_backoff)
    }
}

/// Thin wrapper over `reqwest` that repeats transient failures.
///
/// 5xx, `429` and connect/timeout errors are retried; every other response
/// goes back to the caller untouched, including the last failed one.
#[derive(Clone)]
pub struct HttpClient {
    inner: Client,
    policy: RetryPolicy,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// # Errors
    /// Fails if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn request<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        self.inner.request(method, url)
    }

    /// Send `builder`, repeating it according to the retry policy.
    ///
    /// # Errors
    /// Transport failures after the last attempt, or a request whose body
    /// cannot be cloned for a retry.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let mut retry = 0;
        loop {
            let request = builder
                .try_clone()
                .ok_or_else(|| SeesturmError::Internal("streaming request bodies cannot be retried".into()))?
                .build()
                .map_err(InfraError::from)?;
            let path = request.url().path().to_string();
            let attempts_left = retry + 1 < self.policy.max_attempts;

            match self.inner.execute(request).await {
                Ok(response) if attempts_left && is_transient(response.status()) => {
                    retry += 1;
                    let delay = self.policy.delay(retry, retry_after(&response));
                    warn!(%path, status = %response.status(), retry, ?delay, "transient HTTP status, retrying");
                    pause(delay).await;
                }
                Ok(response) => {
                    debug!(%path, status = %response.status(), attempts = retry + 1, "HTTP response");
                    return Ok(response);
                }
                Err(err) if attempts_left && is_transport_retryable(&err) => {
                    retry += 1;
                    let delay = self.policy.delay(retry, None);
                    warn!(%path, error = %err, retry, ?delay, "HTTP transport failure, retrying");
                    pause(delay).await;
                }
                Err(err) => return Err(InfraError::from(err).into()),
            }
        }
    }
}

#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: String,
    policy: RetryPolicy,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            policy: RetryPolicy::default(),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.policy.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.policy.base_backoff = backoff;
        self
    }

    pub fn max_backoff(mut self, backoff: Duration) -> Self {
        self.policy.max_backoff = backoff;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// # Errors
    /// Fails if the TLS backend cannot be initialised.
    pub fn build(self) -> Result<HttpClient> {
        let inner = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(InfraError::from)?;
        Ok(HttpClient { inner, policy: self.policy })
    }
}

fn is_transient(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn is_transport_retryable(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

/// `Retry-After` in its delta-seconds form; HTTP dates are ignored.
fn retry_after(response: &Response) -> Option<Duration> {
    let value = response.headers().get(RETRY_AFTER)?.to_str().ok()?;
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

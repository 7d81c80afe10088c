//! Event submission port

use async_trait::async_trait;
use seesturm_domain::{EventDraft, EventKind, Result, SubmissionMode};

/// Trait for the remote function that writes events to the calendars
#[async_trait]
pub trait EventSubmitter: Send + Sync {
    /// Insert or update `draft` in the calendars of `kind`, optionally
    /// sending a push notification
    async fn submit_event_draft(
        &self,
        kind: &EventKind,
        draft: &EventDraft,
        mode: SubmissionMode,
        notify: bool,
    ) -> Result<()>;
}

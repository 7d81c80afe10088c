//! Event publishing service - validates drafts before submitting them

use std::sync::Arc;

use seesturm_common::Clock;
use seesturm_domain::{EventDraft, EventKind, Result, SubmissionMode, Verdict};
use tracing::{info, instrument, warn};

use super::policy::validate;
use super::ports::EventSubmitter;

/// Outcome of a publish attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Published,
    /// A warning the user has not confirmed yet; nothing was submitted.
    NeedsConfirmation(String),
    /// Blocked until the draft is corrected; nothing was submitted.
    Rejected(String),
}

/// Publishing request for one draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub kind: EventKind,
    pub draft: EventDraft,
    pub mode: SubmissionMode,
    pub notify: bool,
    /// Set once the user accepted a previous warning.
    pub confirmed: bool,
}

pub struct EventPublishingService {
    submitter: Arc<dyn EventSubmitter>,
    clock: Arc<dyn Clock>,
}

impl EventPublishingService {
    pub fn new(submitter: Arc<dyn EventSubmitter>, clock: Arc<dyn Clock>) -> Self {
        Self { submitter, clock }
    }

    /// Verdict for `draft` as of now, including the target check.
    pub fn check(&self, kind: &EventKind, draft: &EventDraft, mode: SubmissionMode) -> Verdict {
        if let EventKind::MultiAktivitaeten(stufen) = kind {
            if stufen.is_empty() {
                return Verdict::Error("Es muss mindestens eine Stufe ausgewählt sein.".into());
            }
        }
        validate(draft, mode, self.clock.now())
    }

    /// Validate authoritatively and submit if allowed.
    ///
    /// # Errors
    /// Returns the submitter's error if the remote call fails.
    #[instrument(skip(self, request), fields(kind = %request.kind.label(), mode = ?request.mode))]
    pub async fn publish(&self, request: &PublishRequest) -> Result<PublishOutcome> {
        match self.check(&request.kind, &request.draft, request.mode) {
            Verdict::Error(message) => {
                warn!(reason = %message, "draft rejected");
                return Ok(PublishOutcome::Rejected(message));
            }
            Verdict::Warning(message) if !request.confirmed => {
                return Ok(PublishOutcome::NeedsConfirmation(message));
            }
            Verdict::Warning(_) | Verdict::Valid => {}
        }

        self.submitter
            .submit_event_draft(&request.kind, &request.draft, request.mode, request.notify)
            .await?;
        info!(notify = request.notify, "event draft submitted");
        Ok(PublishOutcome::Published)
    }
}

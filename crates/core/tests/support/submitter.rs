use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use seesturm_core::EventSubmitter;
use seesturm_domain::{EventDraft, EventKind, Result as DomainResult, SeesturmError, SubmissionMode};

/// Submission captured by [`RecordingSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub kind: EventKind,
    pub draft: EventDraft,
    pub mode: SubmissionMode,
    pub notify: bool,
}

/// Records submissions and optionally fails them.
#[derive(Default, Clone)]
pub struct RecordingSubmitter {
    submissions: Arc<Mutex<Vec<Submission>>>,
    failure: Option<SeesturmError>,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: SeesturmError) -> Self {
        Self { failure: Some(error), ..Self::default() }
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().clone()
    }
}

#[async_trait]
impl EventSubmitter for RecordingSubmitter {
    async fn submit_event_draft(
        &self,
        kind: &EventKind,
        draft: &EventDraft,
        mode: SubmissionMode,
        notify: bool,
    ) -> DomainResult<()> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.submissions.lock().push(Submission {
            kind: kind.clone(),
            draft: draft.clone(),
            mode,
            notify,
        });
        Ok(())
    }
}

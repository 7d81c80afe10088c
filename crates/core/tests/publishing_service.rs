//! Integration tests for `EventPublishingService`

mod support;

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use seesturm_common::MockClock;
use seesturm_core::{EventPublishingService, PublishOutcome, PublishRequest};
use seesturm_domain::{EventDraft, EventKind, SeesturmError, Stufe, SubmissionMode, Verdict};
use support::fixtures::now;
use support::submitter::RecordingSubmitter;

fn draft() -> EventDraft {
    let start = Utc.with_ymd_and_hms(2025, 6, 7, 12, 0, 0).unwrap();
    EventDraft {
        summary: "Waldaktivität".into(),
        description: "Treffpunkt beim Pfadiheim".into(),
        location: "Pfadiheim Seesturm".into(),
        start,
        end: start + Duration::hours(3),
        is_all_day: false,
    }
}

fn request(kind: EventKind, draft: EventDraft, confirmed: bool) -> PublishRequest {
    PublishRequest { kind, draft, mode: SubmissionMode::Insert, notify: true, confirmed }
}

fn service(submitter: &RecordingSubmitter) -> EventPublishingService {
    EventPublishingService::new(Arc::new(submitter.clone()), Arc::new(MockClock::new(now())))
}

#[tokio::test]
async fn valid_draft_is_submitted() {
    let submitter = RecordingSubmitter::new();
    let outcome = service(&submitter)
        .publish(&request(EventKind::Aktivitaet(Stufe::Wolf), draft(), false))
        .await
        .unwrap();

    assert_eq!(outcome, PublishOutcome::Published);
    let submissions = submitter.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].kind, EventKind::Aktivitaet(Stufe::Wolf));
    assert!(submissions[0].notify);
}

#[tokio::test]
async fn warning_needs_confirmation_first() {
    let submitter = RecordingSubmitter::new();
    let service = service(&submitter);
    let mut short = draft();
    short.end = short.start + Duration::minutes(90);

    let outcome = service.publish(&request(EventKind::Termin, short.clone(), false)).await.unwrap();
    assert!(matches!(outcome, PublishOutcome::NeedsConfirmation(ref m) if m.contains("2 Stunden")));
    assert!(submitter.submissions().is_empty());

    let outcome = service.publish(&request(EventKind::Termin, short, true)).await.unwrap();
    assert_eq!(outcome, PublishOutcome::Published);
    assert_eq!(submitter.submissions().len(), 1);
}

#[tokio::test]
async fn errors_are_never_submitted_even_when_confirmed() {
    let submitter = RecordingSubmitter::new();
    let mut broken = draft();
    broken.end = broken.start - Duration::hours(1);

    let outcome = service(&submitter)
        .publish(&request(EventKind::Termin, broken, true))
        .await
        .unwrap();

    assert!(matches!(outcome, PublishOutcome::Rejected(_)));
    assert!(submitter.submissions().is_empty());
}

#[tokio::test]
async fn multi_activity_needs_a_stufe() {
    let submitter = RecordingSubmitter::new();
    let service = service(&submitter);

    assert!(service
        .check(&EventKind::MultiAktivitaeten(Vec::new()), &draft(), SubmissionMode::Insert)
        .is_error());
    assert_eq!(
        service.check(
            &EventKind::MultiAktivitaeten(vec![Stufe::Biber, Stufe::Pio]),
            &draft(),
            SubmissionMode::Update
        ),
        Verdict::Valid
    );
}

#[tokio::test]
async fn submitter_errors_propagate() {
    let submitter = RecordingSubmitter::failing(SeesturmError::Auth("not a leader".into()));
    let result = service(&submitter)
        .publish(&request(EventKind::Aktivitaet(Stufe::Pfadi), draft(), false))
        .await;
    assert_eq!(result, Err(SeesturmError::Auth("not a leader".into())));
}

//! Pre-publication checks for event drafts
//!
//! Rules run in a fixed order and the first match wins, so errors always
//! shadow warnings.

use chrono::{DateTime, Duration, Utc};
use seesturm_domain::constants::SHORT_EVENT_THRESHOLD_HOURS;
use seesturm_domain::{EventDraft, SubmissionMode, Verdict};

/// Validate `draft` as of `now`.
pub fn validate(draft: &EventDraft, mode: SubmissionMode, now: DateTime<Utc>) -> Verdict {
    let verb = mode.verb();
    let confirm = |problem: &str| Verdict::Warning(format!("{problem} Trotzdem {verb}?"));

    if draft.end < draft.start {
        return Verdict::Error("Das Enddatum darf nicht vor dem Startdatum liegen.".into());
    }
    if draft.summary.trim().is_empty() {
        return Verdict::Error("Der Titel darf nicht leer sein.".into());
    }
    if !draft.is_all_day && draft.duration() < Duration::hours(SHORT_EVENT_THRESHOLD_HOURS) {
        return confirm(&format!(
            "Der Anlass ist kürzer als {SHORT_EVENT_THRESHOLD_HOURS} Stunden."
        ));
    }
    if draft.start < now {
        return confirm("Das Startdatum liegt in der Vergangenheit.");
    }
    if draft.end < now {
        return confirm("Das Enddatum liegt in der Vergangenheit.");
    }
    if draft.description.trim().is_empty() {
        return confirm("Die Beschreibung ist leer.");
    }
    if draft.location.trim().is_empty() {
        return confirm("Der Ort ist leer.");
    }
    Verdict::Valid
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
    }

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

    fn warning(verdict: &Verdict) -> &str {
        match verdict {
            Verdict::Warning(message) => message,
            other => panic!("expected warning, got {other:?}"),
        }
    }

    #[test]
    fn complete_draft_is_valid() {
        assert_eq!(validate(&draft(), SubmissionMode::Insert, now()), Verdict::Valid);
    }

    #[test]
    fn end_before_start_wins_over_empty_title() {
        let mut draft = draft();
        draft.end = draft.start - Duration::minutes(1);
        draft.summary = "  ".into();
        draft.description.clear();

        assert_eq!(
            validate(&draft, SubmissionMode::Update, now()),
            Verdict::Error("Das Enddatum darf nicht vor dem Startdatum liegen.".into())
        );
    }

    #[test]
    fn end_before_start_always_errors() {
        let mut draft = draft();
        draft.end = draft.start - Duration::days(1);
        draft.is_all_day = true;
        assert!(validate(&draft, SubmissionMode::Insert, now()).is_error());
    }

    #[test]
    fn blank_title_is_an_error() {
        let mut draft = draft();
        draft.summary = "\n ".into();
        assert_eq!(
            validate(&draft, SubmissionMode::Insert, now()),
            Verdict::Error("Der Titel darf nicht leer sein.".into())
        );
    }

    #[test]
    fn short_event_warns_with_mode_verb() {
        let mut draft = draft();
        draft.end = draft.start + Duration::minutes(90);

        let insert = validate(&draft, SubmissionMode::Insert, now());
        assert!(warning(&insert).contains("kürzer als 2 Stunden"));
        assert!(warning(&insert).ends_with("veröffentlichen?"));

        let update = validate(&draft, SubmissionMode::Update, now());
        assert!(warning(&update).ends_with("aktualisieren?"));

        draft.is_all_day = true;
        assert_eq!(validate(&draft, SubmissionMode::Insert, now()), Verdict::Valid);
    }

    #[test]
    fn exactly_two_hours_is_not_short() {
        let mut draft = draft();
        draft.end = draft.start + Duration::hours(2);
        assert_eq!(validate(&draft, SubmissionMode::Insert, now()), Verdict::Valid);
    }

    #[test]
    fn past_dates_warn() {
        let mut draft = draft();
        draft.start = now() - Duration::hours(1);
        draft.end = now() + Duration::hours(2);
        assert!(warning(&validate(&draft, SubmissionMode::Insert, now())).starts_with("Das Startdatum"));

        draft.start = now() - Duration::hours(5);
        draft.end = now() - Duration::hours(2);
        // Start is checked before end.
        assert!(warning(&validate(&draft, SubmissionMode::Insert, now())).starts_with("Das Startdatum"));

        draft.is_all_day = true;
        draft.start = now() - Duration::hours(5);
        draft.end = now() - Duration::hours(4);
        assert!(warning(&validate(&draft, SubmissionMode::Insert, now())).starts_with("Das Startdatum"));
    }

    #[test]
    fn empty_description_before_location() {
        let mut draft = draft();
        draft.description = " ".into();
        draft.location = String::new();
        assert!(warning(&validate(&draft, SubmissionMode::Insert, now())).starts_with("Die Beschreibung"));

        draft.description = "Mit Znüni".into();
        assert!(warning(&validate(&draft, SubmissionMode::Insert, now())).starts_with("Der Ort"));
    }
}

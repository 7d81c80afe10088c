//! Domain types and models
//!
//! Raw calendar DTOs come in, normalized events and merged rosters go out.

pub mod attendance;
pub mod calendar;
pub mod draft;
pub mod roster;
pub mod stufe;

// Re-export all types at module root for convenience
pub use attendance::{AttendanceDocument, AttendanceRecord, InteractionType};
pub use calendar::{NormalizedEvent, NormalizedEventsPage, RawCalendarEvent, RawEventDateTime, RawEventsPage};
pub use draft::{EventDraft, SubmissionMode, Verdict};
pub use roster::{RosterEntry, RosterMonth, RosterSnapshot};
pub use stufe::{EventKind, Stufe};

//! # Seesturm Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Event normalization (raw Google Calendar JSON to display-ready events)
//! - Roster reconciliation (events merged with An-/Abmeldungen)
//! - Event draft validation
//! - Port/adapter interfaces (traits) and the services driving them
//!
//! ## Architecture Principles
//! - Only depends on `seesturm-common` and `seesturm-domain`
//! - No HTTP or storage code
//! - All external dependencies via traits

pub mod events;
pub mod roster;
pub mod validation;

pub use events::ports::{CalendarEventsSource, EventsQuery};
pub use events::{normalize_event, transform_events_page, CalendarService, NormalizeContext};
pub use roster::ports::{AttendanceSource, AttendanceUpdate};
pub use roster::{reconcile, RosterComposer, RosterHandle, RosterService};
pub use validation::ports::EventSubmitter;
pub use validation::{validate, EventPublishingService, PublishOutcome, PublishRequest};

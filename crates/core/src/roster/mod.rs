//! An-/Abmeldung rosters: events merged with attendance

pub mod composer;
pub mod ports;
pub mod reconciler;
pub mod records;
pub mod service;

pub use composer::RosterComposer;
pub use ports::*;
pub use reconciler::{group_by_month, reconcile, upcoming};
pub use records::{to_record, to_records};
pub use service::{RosterHandle, RosterService};

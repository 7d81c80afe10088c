//! Calendar events: normalization and fetching

pub mod format;
pub mod normalizer;
pub mod page;
pub mod ports;
pub mod service;

pub use normalizer::{normalize_event, parse_instant, resolve_floating_date, NormalizeContext};
pub use page::transform_events_page;
pub use ports::*;
pub use service::*;

//! Time utilities and abstractions
//!
//! - **[`clock`]**: wall-clock abstraction with a real and a mock
//!   implementation
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use seesturm_common::time::{Clock, MockClock};
//!
//! let clock = MockClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
//! clock.advance(Duration::minutes(90));
//! assert_eq!(clock.now(), Utc.with_ymd_and_hms(2025, 6, 1, 13, 30, 0).unwrap());
//! ```

pub mod clock;

// Re-export commonly used items
pub use clock::{Clock, MockClock, SystemClock};

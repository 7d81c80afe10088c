//! Common utilities shared across Seesturm crates.
//!
//! Only code without domain knowledge lives here. At the moment that is the
//! [`time::Clock`] abstraction which lets the core evaluate "now"-dependent
//! rules (relative date strings, started/ended flags, past-date warnings)
//! deterministically in tests.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod time;

// Re-export commonly used types and traits for convenience
pub use time::{Clock, MockClock, SystemClock};

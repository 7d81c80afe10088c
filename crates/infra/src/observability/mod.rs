//! Observability infrastructure
//!
//! Structured logging through `tracing`. Library code only emits events;
//! binaries and tests call [`init_tracing`] once to install a subscriber.

pub mod logging;

pub use logging::{build_filter, init_tracing};

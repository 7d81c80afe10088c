//! # Seesturm Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, `.env`, JSON/TOML files)
//! - A retrying HTTP client and error mapping
//! - The Google Calendar events source
//! - The push-based attendance feed
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `seesturm-core`
//! - Contains all "impure" code (I/O, network, process environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::*;
pub use integrations::*;
pub use observability::init_tracing;

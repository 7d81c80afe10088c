//! # Seesturm Domain
//!
//! Business domain types and models for the Pfadi Seesturm event core.
//!
//! This crate contains:
//! - Raw Google Calendar DTOs and the normalized event model
//! - Attendance ("An-/Abmeldung") documents and records
//! - Event drafts, submission modes and validation verdicts
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other Seesturm crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::time_zone::parse_time_zone;

//! Google Calendar v3 REST adapter

pub mod source;
pub mod types;

pub use source::GoogleCalendarSource;

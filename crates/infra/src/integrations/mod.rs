//! External service integrations

pub mod attendance;
pub mod google_calendar;

pub use attendance::AttendanceFeed;
pub use google_calendar::GoogleCalendarSource;

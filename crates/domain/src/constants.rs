//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use chrono_tz::Tz;

// Calendar presentation
pub const DISPLAY_TIME_ZONE: Tz = chrono_tz::Europe::Zurich;
pub const DISPLAY_TIME_ZONE_NAME: &str = "Europe/Zurich";
pub const UNTITLED_EVENT_TITLE: &str = "Unbenannter Anlass";
pub const ALL_DAY_LABEL: &str = "Ganztägig";

// Google Calendar API
pub const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
pub const DEFAULT_MAX_RESULTS: u32 = 100;
pub const DEFAULT_MAX_PAGES: u32 = 10;

// Event validation
pub const SHORT_EVENT_THRESHOLD_HOURS: i64 = 2;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";

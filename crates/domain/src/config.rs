//! Configuration structures
//!
//! Loading (environment, JSON, TOML) lives in `seesturm-infra::config`; this
//! module only defines the shape and its invariants.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_PAGES, DEFAULT_MAX_RESULTS, DISPLAY_TIME_ZONE_NAME,
    GOOGLE_CALENDAR_API_BASE,
};
use crate::errors::{Result, SeesturmError};
use crate::types::{EventKind, Stufe};
use crate::utils::time_zone::parse_time_zone;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeesturmConfig {
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SeesturmConfig {
    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    /// Returns `SeesturmError::Config` for an empty API key, a zero page
    /// size or page limit, or an unknown display time zone.
    pub fn validate(&self) -> Result<()> {
        if self.calendar.api_key.trim().is_empty() {
            return Err(SeesturmError::Config("calendar.api_key must not be empty".into()));
        }
        if self.calendar.max_results == 0 {
            return Err(SeesturmError::Config("calendar.max_results must be positive".into()));
        }
        if self.calendar.max_pages == 0 {
            return Err(SeesturmError::Config("calendar.max_pages must be positive".into()));
        }
        self.calendar.display_tz()?;
        Ok(())
    }
}

/// Google Calendar access and calendar ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    pub api_key: String,
    #[serde(default = "default_display_time_zone")]
    pub display_time_zone: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    pub termine_calendar_id: String,
    pub stufen: StufenCalendars,
}

impl CalendarConfig {
    /// Display time zone as a parsed zone.
    ///
    /// # Errors
    /// Returns `SeesturmError::Config` if the identifier is unknown.
    pub fn display_tz(&self) -> Result<Tz> {
        parse_time_zone(&self.display_time_zone)
            .map_err(|e| SeesturmError::Config(format!("calendar.display_time_zone: {e}")))
    }

    pub fn calendar_id(&self, stufe: Stufe) -> &str {
        match stufe {
            Stufe::Biber => &self.stufen.biber,
            Stufe::Wolf => &self.stufen.wolf,
            Stufe::Pfadi => &self.stufen.pfadi,
            Stufe::Pio => &self.stufen.pio,
        }
    }

    /// Calendars an event of `kind` is published to.
    pub fn calendar_ids(&self, kind: &EventKind) -> Vec<&str> {
        match kind {
            EventKind::Aktivitaet(stufe) => vec![self.calendar_id(*stufe)],
            EventKind::MultiAktivitaeten(stufen) => {
                stufen.iter().map(|stufe| self.calendar_id(*stufe)).collect()
            }
            EventKind::Termin => vec![self.termine_calendar_id.as_str()],
        }
    }
}

/// Calendar id per Stufe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StufenCalendars {
    pub biber: String,
    pub wolf: String,
    pub pfadi: String,
    pub pio: String,
}

/// Tracing output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_api_base_url() -> String {
    GOOGLE_CALENDAR_API_BASE.to_string()
}

fn default_display_time_zone() -> String {
    DISPLAY_TIME_ZONE_NAME.to_string()
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

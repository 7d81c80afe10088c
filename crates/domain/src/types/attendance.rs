//! An-/Abmeldung types
//!
//! [`AttendanceDocument`] is the document shape pushed by the attendance
//! store; [`AttendanceRecord`] is what rosters display.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::stufe::Stufe;
use crate::impl_domain_status_conversions;

/// Whether a participant signed up or cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionType {
    #[serde(rename = "anmelden")]
    Registering,
    #[serde(rename = "abmelden")]
    Deregistering,
}

impl InteractionType {
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Registering => "Anmeldungen",
            Self::Deregistering => "Abmeldungen",
        }
    }
}

impl_domain_status_conversions!(InteractionType {
    Registering => "anmelden",
    Deregistering => "abmelden",
});

/// Raw attendance document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDocument {
    pub id: String,
    pub event_id: String,
    pub stufe: Stufe,
    pub vorname: String,
    pub nachname: String,
    #[serde(default)]
    pub pfadiname: Option<String>,
    #[serde(default)]
    pub bemerkung: Option<String>,
    #[serde(rename = "type")]
    pub interaction: InteractionType,
    pub created: DateTime<Utc>,
}

impl AttendanceDocument {
    /// `"Vorname Nachname / Pfadiname"`, or without the scout name if absent.
    pub fn display_name(&self) -> String {
        let full_name = format!("{} {}", self.vorname.trim(), self.nachname.trim());
        let full_name = full_name.trim();
        match self.pfadiname.as_deref().map(str::trim) {
            Some(pfadiname) if !pfadiname.is_empty() => format!("{full_name} / {pfadiname}"),
            _ => full_name.to_string(),
        }
    }
}

/// Attendance entry as shown in a roster
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub id: String,
    pub event_id: String,
    pub stufe: Stufe,
    pub interaction: InteractionType,
    pub display_name: String,
    pub created: DateTime<Tz>,
    pub created_string: String,
    pub remark: Option<String>,
}

//! Scouting groups and event kinds

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Scouting age group ("Stufe")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stufe {
    Biber,
    Wolf,
    Pfadi,
    Pio,
}

impl Stufe {
    pub const ALL: [Stufe; 4] = [Stufe::Biber, Stufe::Wolf, Stufe::Pfadi, Stufe::Pio];

    /// Display name, e.g. `"Wolfsstufe"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Biber => "Biberstufe",
            Self::Wolf => "Wolfsstufe",
            Self::Pfadi => "Pfadistufe",
            Self::Pio => "Piostufe",
        }
    }
}

impl_domain_status_conversions!(Stufe {
    Biber => "biber",
    Wolf => "wolf",
    Pfadi => "pfadi",
    Pio => "pio",
});

/// What kind of calendar entry an event is.
///
/// Each variant carries exactly what it needs; callers dispatch with an
/// exhaustive `match` instead of probing capabilities at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "stufen", rename_all = "camelCase")]
pub enum EventKind {
    /// Activity of a single Stufe, with An-/Abmeldungen.
    Aktivitaet(Stufe),
    /// The same activity published to several Stufen at once.
    MultiAktivitaeten(Vec<Stufe>),
    /// General calendar entry not tied to a Stufe.
    Termin,
}

impl EventKind {
    /// Stufen this event belongs to (empty for a Termin).
    pub fn stufen(&self) -> &[Stufe] {
        match self {
            Self::Aktivitaet(stufe) => std::slice::from_ref(stufe),
            Self::MultiAktivitaeten(stufen) => stufen,
            Self::Termin => &[],
        }
    }

    /// Whether participants can sign up or cancel for this event.
    pub fn accepts_attendance(&self) -> bool {
        match self {
            Self::Aktivitaet(_) | Self::MultiAktivitaeten(_) => true,
            Self::Termin => false,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Aktivitaet(stufe) => format!("Aktivität der {}", stufe.name()),
            Self::MultiAktivitaeten(stufen) => {
                let names: Vec<&str> = stufen.iter().map(Stufe::name).collect();
                format!("Aktivität der {}", names.join(", "))
            }
            Self::Termin => "Termin".to_string(),
        }
    }
}

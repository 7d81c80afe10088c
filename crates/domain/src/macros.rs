//! Macro for implementing Display and FromStr for wire-level enums
//!
//! Scouting groups and attendance interaction types travel as lowercase
//! strings (Firestore fields, config keys, log fields). This macro provides
//! both directions of the conversion from a single mapping.
//!
//! # Example
//!
//! ```rust
//! use seesturm_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Weekday {
//!     Samstag,
//!     Sonntag,
//! }
//!
//! impl_domain_status_conversions!(Weekday {
//!     Samstag => "samstag",
//!     Sonntag => "sonntag",
//! });
//!
//! assert_eq!(Weekday::Samstag.to_string(), "samstag");
//! assert_eq!("SONNTAG".parse::<Weekday>().unwrap(), Weekday::Sonntag);
//! ```

/// Implements Display and FromStr traits for string-mapped enums
///
/// - Display writes the mapped lowercase string
/// - FromStr parses case-insensitively and reports the enum name on failure
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads a `.env` file into the process environment, if one exists
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to loading from file
//! 4. Probes multiple paths for config files
//! 5. Supports JSON and TOML formats
//!
//! Every successfully loaded configuration is validated before it is
//! returned.
//!
//! ## Environment Variables
//! Required:
//! - `SEESTURM_API_KEY`: Google Calendar API key
//! - `SEESTURM_TERMINE_CALENDAR_ID`: Calendar of general Termine
//! - `SEESTURM_BIBER_CALENDAR_ID`, `SEESTURM_WOLF_CALENDAR_ID`,
//!   `SEESTURM_PFADI_CALENDAR_ID`, `SEESTURM_PIO_CALENDAR_ID`: Stufen
//!   calendars
//!
//! Optional:
//! - `SEESTURM_API_BASE_URL`: Calendar API base URL
//! - `SEESTURM_DISPLAY_TIME_ZONE`: IANA zone for display (`Europe/Zurich`)
//! - `SEESTURM_MAX_RESULTS`: Events per page
//! - `SEESTURM_MAX_PAGES`: Page limit per fetch
//! - `SEESTURM_LOG_LEVEL`: Default tracing level
//! - `SEESTURM_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.{json,toml}` and `./seesturm.{json,toml}` (current working
//!    directory)
//! 2. Parent and grandparent directories
//! 3. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use seesturm_domain::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_PAGES, DEFAULT_MAX_RESULTS, DISPLAY_TIME_ZONE_NAME,
    GOOGLE_CALENDAR_API_BASE,
};
use seesturm_domain::{
    CalendarConfig, LoggingConfig, Result, SeesturmConfig, SeesturmError, StufenCalendars,
};

const FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "seesturm.json", "seesturm.toml"];

/// Load configuration with automatic fallback strategy
///
/// Loads `.env`, then attempts environment variables. If any required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `SeesturmError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or fail validation
pub fn load() -> Result<SeesturmConfig> {
    load_dotenv();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load a `.env` file from the working directory or its parents.
///
/// Variables already present in the environment win. Returns the loaded
/// path, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!(error = %e, "Could not load .env file");
            None
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `SeesturmError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<SeesturmConfig> {
    let config = SeesturmConfig {
        calendar: CalendarConfig {
            api_base_url: env_or("SEESTURM_API_BASE_URL", GOOGLE_CALENDAR_API_BASE),
            api_key: env_var("SEESTURM_API_KEY")?,
            display_time_zone: env_or("SEESTURM_DISPLAY_TIME_ZONE", DISPLAY_TIME_ZONE_NAME),
            max_results: env_parse("SEESTURM_MAX_RESULTS", DEFAULT_MAX_RESULTS)?,
            max_pages: env_parse("SEESTURM_MAX_PAGES", DEFAULT_MAX_PAGES)?,
            termine_calendar_id: env_var("SEESTURM_TERMINE_CALENDAR_ID")?,
            stufen: StufenCalendars {
                biber: env_var("SEESTURM_BIBER_CALENDAR_ID")?,
                wolf: env_var("SEESTURM_WOLF_CALENDAR_ID")?,
                pfadi: env_var("SEESTURM_PFADI_CALENDAR_ID")?,
                pio: env_var("SEESTURM_PIO_CALENDAR_ID")?,
            },
        },
        logging: LoggingConfig {
            level: env_or("SEESTURM_LOG_LEVEL", DEFAULT_LOG_LEVEL),
            json: env_bool("SEESTURM_LOG_JSON", false),
        },
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `SeesturmError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or fail validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<SeesturmConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SeesturmError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SeesturmError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SeesturmError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `SeesturmError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<SeesturmConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SeesturmError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SeesturmError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SeesturmError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| [root.clone(), root.join(".."), root.join("../..")])
        .flat_map(|dir| FILE_NAMES.map(|name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `SeesturmError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| SeesturmError::Config(format!("Missing required environment variable: {}", key)))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| SeesturmError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

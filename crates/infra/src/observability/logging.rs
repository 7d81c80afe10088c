//! `tracing-subscriber` setup

use seesturm_domain::{LoggingConfig, Result, SeesturmError};
use tracing_subscriber::EnvFilter;

/// Filter for `config`; a non-empty `RUST_LOG` takes precedence over the
/// configured level.
///
/// # Errors
/// Returns `SeesturmError::Config` if the resulting directive is invalid.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directive = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| config.level.clone());

    EnvFilter::try_new(&directive)
        .map_err(|e| SeesturmError::Config(format!("Invalid log filter '{directive}': {e}")))
}

/// Install the global fmt subscriber.
///
/// # Errors
/// Returns `SeesturmError::Config` for an invalid filter or if a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.try_init()
    };

    installed
        .map_err(|e| SeesturmError::Config(format!("Failed to install tracing subscriber: {e}")))?;
    tracing::debug!(level = %config.level, json = config.json, "tracing initialised");
    Ok(())
}

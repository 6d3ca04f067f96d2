//! Observability (logging)
//!
//! Diagnostics go to stderr through `tracing`; operator-facing confirmation
//! lines are printed by the CLI on stdout and are not part of this stack.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingSettings;
use crate::error::{Result, WebclipError};

/// Initialize logging
///
/// Filter precedence: `RUST_LOG`, then `debug` when `verbose` is set, then
/// the configured level.
///
/// # Example
///
/// ```rust,no_run
/// use webclip::config::LoggingSettings;
/// use webclip::observability;
///
/// # fn main() -> webclip::Result<()> {
/// observability::init(&LoggingSettings::default(), false)?;
/// tracing::info!("generator started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the configured level is not a valid filter directive
/// or a global subscriber is already installed.
pub fn init(settings: &LoggingSettings, verbose: bool) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive(settings, verbose))
            .map_err(|e| WebclipError::InvalidInput(format!("invalid log level: {e}")))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if settings.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed.map_err(|e| WebclipError::Unexpected(format!("failed to install logger: {e}")))
}

fn default_directive(settings: &LoggingSettings, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        settings.level.clone()
    }
}

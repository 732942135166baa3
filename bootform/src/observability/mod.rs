//! Observability (logging)
//!
//! Logs are written to stderr; stdout is reserved for generated markup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogSettings;

/// Initialize logging
///
/// Filter precedence: `RUST_LOG`, then `settings.filter`, then `debug` when
/// `verbose` is set, otherwise `warn`. Debug builds use the compact
/// formatter, release builds JSON.
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
///
/// # Example
///
/// ```rust,no_run
/// use bootform::{config::LogSettings, observability};
///
/// observability::init(&LogSettings::default(), false);
/// tracing::info!("Application started");
/// ```
pub fn init(settings: &LogSettings, verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(settings, verbose)));

    #[cfg(debug_assertions)]
    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init();

    #[cfg(not(debug_assertions))]
    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

fn default_directive(settings: &LogSettings, verbose: bool) -> String {
    match (&settings.filter, verbose) {
        (Some(filter), _) => filter.clone(),
        (None, true) => "debug".to_string(),
        (None, false) => "warn".to_string(),
    }
}

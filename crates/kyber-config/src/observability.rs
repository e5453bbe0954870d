// Tracing initialization with configurable and reloadable log level.
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

use crate::LoggingConfig;

static LOG_RELOAD_HANDLE: OnceLock<reload::Handle<EnvFilter, tracing_subscriber::Registry>> =
    OnceLock::new();

pub fn init_tracing(logging: &LoggingConfig) -> bool {
    init_tracing_with_level(&logging.level)
}

/// Installs the global subscriber. Returns `false` if one was already set,
/// in which case the level cannot be changed through [`apply_logging_level`].
pub fn init_tracing_with_level(level: &str) -> bool {
    // RUST_LOG wins over the configured level.
    let base_filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|_| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(level));

    let (reload_layer, handle) = reload::Layer::new(base_filter);
    if let Err(err) = tracing_subscriber::registry()
        .with(reload_layer)
        .with(fmt::layer())
        .try_init()
    {
        tracing::debug!(error = %err, "Tracing already initialized");
        return false;
    }

    // Only reachable once: try_init fails for every later call.
    let _ = LOG_RELOAD_HANDLE.set(handle);
    true
}

/// Apply a new logging level at runtime if tracing was initialized here.
///
/// Returns `false` when there is nothing to reload.
pub fn apply_logging_level(level: &str) -> bool {
    match LOG_RELOAD_HANDLE.get() {
        Some(handle) => handle
            .modify(|f| {
                *f = EnvFilter::new(level);
            })
            .is_ok(),
        None => false,
    }
}

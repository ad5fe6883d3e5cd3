//! Tracing subscriber setup for hosts that embed the engine

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format of log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, one line per event
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a global fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (e.g. `"info"` or `"hcfg_mutate=debug"`)
///
/// Returns `false` if a global subscriber was already set.
pub fn init_logging(default_directive: &str) -> bool {
    init_logging_with(default_directive, LogFormat::Compact)
}

/// [`init_logging`] with an explicit output format
pub fn init_logging_with(default_directive: &str, format: LogFormat) -> bool {
    let registry = tracing_subscriber::registry().with(env_filter(default_directive));
    let installed = match format {
        LogFormat::Compact => registry.with(fmt::layer().compact().with_target(true)).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).try_init(),
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        let _ = init_logging("warn");
        assert!(!init_logging("debug"));
        assert!(!init_logging_with("debug", LogFormat::Json));
    }
}

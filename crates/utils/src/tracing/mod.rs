use crate::config::{LogConfig, LogFormat};
use funcplus_core::{Error, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

// Re-export tracing macros for convenience
pub use ::tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system from `config`.
///
/// Logs go to stderr. Colour follows `config.ansi`, or TTY detection when
/// unset. Installing a second global subscriber is reported as an error.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = config.env_filter()?;
    let ansi = config.ansi.unwrap_or_else(is_tty);

    let fmt_layer = match config.format {
        LogFormat::Compact => fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_level(true)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .json()
            .with_current_span(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::configuration(format!("failed to install tracing subscriber: {e}")))?;

    debug!(filter = %config.filter, format = %config.format, "tracing initialised");
    Ok(())
}

/// Initialize the tracing system from the `FUNCPLUS_LOG*` variables
pub fn init_from_env() -> Result<()> {
    init(&LogConfig::from_env()?)
}

/// Install a subscriber that writes through the test harness.
///
/// Safe to call from every test; returns `false` when a subscriber was
/// already installed.
pub fn init_for_tests(filter: &str) -> bool {
    let Ok(filter) = LogConfig::new().with_filter(filter).env_filter() else {
        return false;
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_test_writer().compact())
        .try_init()
        .is_ok()
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

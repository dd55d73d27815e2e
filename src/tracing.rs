//! Tracing infrastructure.
//!
//! While a session is running the terminal is in raw mode and owned by
//! the renderer, so logs go to a daily-rotated file under
//! `~/.config/dira/logs/` instead of the console. Filtering follows
//! RUST_LOG (e.g. `RUST_LOG=dira::editable=trace`), defaulting to
//! `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the file-backed tracing subscriber. Logging is best
/// effort: when no config directory is available the session simply
/// runs unlogged.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dira.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_filter(filter),
            )
        }
        Err(_) => None,
    };

    tracing_subscriber::registry().with(file_layer).init();
}

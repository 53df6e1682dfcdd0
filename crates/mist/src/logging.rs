//! Logging setup for the `mist` binary
//!
//! Console output goes to stderr so stdout carries only help text and the
//! JSON configuration record.

use anyhow::Result;
use std::any::Any;
use std::panic::Location;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Directory for the optional daily rolling log file
pub const LOG_DIR_ENV: &str = "MIST_LOG_DIR";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn init() -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let (file_layer, guard) = match std::env::var_os(LOG_DIR_ENV) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "mist.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

/// Render a panic payload and its location as a single line
pub fn panic_message(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let msg = if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "Unknown panic"
    };

    let location = location
        .map(|l| format!("{}:{}", l.file(), l.line()))
        .unwrap_or_default();
    format!("panic at {}: {}", location, msg)
}

/// Report panics through tracing as well as stderr
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let line = panic_message(panic_info.payload(), panic_info.location());
        tracing::error!(target: "panic", "{}", line);
        eprintln!("{}", line);
    }));
}

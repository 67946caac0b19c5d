//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

use crate::logging::{LogFormat, LogLevel};

/// Install a `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `level`. Calling this more than once is a
/// no-op, and so is calling it after another subscriber was installed.
pub fn init_tracing(level: LogLevel, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Human => builder.without_time().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_noop() {
        init_tracing(LogLevel::Warn, LogFormat::Human);
        init_tracing(LogLevel::Debug, LogFormat::Json);
        tracing::info!("after init");
    }
}

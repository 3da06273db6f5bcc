//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger that forwards to the `tracing` crate under the `placemark` target.
///
/// Output depends on the installed subscriber; see
/// [`init_logging`](crate::logging::init_logging).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "placemark", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "placemark", "{}", args),
            LogLevel::Info => tracing::info!(target: "placemark", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "placemark", "{}", args),
            LogLevel::Error => tracing::error!(target: "placemark", "{}", args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingLogger>();
    }

    #[test]
    fn test_tracing_logger_without_subscriber() {
        // No subscriber installed: events are dropped, nothing panics.
        let logger: Box<dyn Logger> = Box::new(TracingLogger::new());
        logger.info(format_args!("test info"));
        logger.debug(format_args!("test debug"));
    }
}

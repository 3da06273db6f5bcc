//! In-memory logger that keeps every message.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;
use std::sync::Mutex;

/// A single recorded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedMessage {
    pub level: LogLevel,
    pub message: String,
}

/// Logger that records messages instead of printing them.
///
/// Useful for asserting on diagnostics, or for collecting them to show
/// alongside a result.
#[derive(Debug, Default)]
pub struct CaptureLogger {
    messages: Mutex<Vec<CapturedMessage>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far, oldest first.
    pub fn messages(&self) -> Vec<CapturedMessage> {
        match self.messages.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages at `level` or above.
    pub fn at_least(&self, level: LogLevel) -> Vec<CapturedMessage> {
        self.messages()
            .into_iter()
            .filter(|m| m.level >= level)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }

    pub fn clear(&self) {
        match self.messages.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Logger for CaptureLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        let entry = CapturedMessage {
            level,
            message: args.to_string(),
        };
        match self.messages.lock() {
            Ok(mut guard) => guard.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

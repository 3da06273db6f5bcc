//! Logging abstraction layer.
//!
//! Library code reports diagnostics through the [`Logger`] trait rather than
//! calling `tracing` directly. Diagnostics are an optional side channel: the
//! default sink is [`NoOpLogger`], and a host that runs in a development
//! configuration injects [`TracingLogger`] instead.
//!
//! - `Logger`: the interface components accept as `Arc<dyn Logger>`
//! - `TracingLogger`: forwards to the `tracing` crate
//! - `NoOpLogger`: discards everything
//! - `CaptureLogger`: keeps messages in memory for inspection
//!
//! ```
//! use placemark::extract::CoordinateExtractor;
//! use placemark::log::{CaptureLogger, Logger};
//! use std::sync::Arc;
//!
//! let capture = Arc::new(CaptureLogger::new());
//! let extractor = CoordinateExtractor::new().with_logger(capture.clone());
//!
//! let _ = extractor.extract("https://mapy.cz/?x=14.4&y=50.1");
//! assert!(!capture.is_empty());
//! ```

mod capture;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use capture::{CaptureLogger, CapturedMessage};
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;

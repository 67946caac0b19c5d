//! Observability for the catalog dashboard.
//!
//! This crate provides:
//! - `RunId` - Identifier correlating every log line of one CLI run
//! - `StructuredLogger` - Structured logging with run context
//! - `ComputeMetrics` - Timings for report recomputes
//! - `init_tracing` - Subscriber for the `tracing` events the engine emits

mod logging;
mod metrics;
mod run;
mod subscriber;

pub use logging::*;
pub use metrics::*;
pub use run::RunId;
pub use subscriber::init_tracing;

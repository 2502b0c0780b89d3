//! Observability: structured logging and client-side metrics.
//!
//! Logging is built on the `tracing` crate with configurable level and
//! output format. Metrics are collected through the [`MetricsCollector`]
//! trait so applications can bridge to their own pipeline; the crate ships
//! an in-memory collector for tests and a no-op default.

mod logging;
mod metrics;

pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use metrics::{InMemoryMetricsCollector, MetricsCollector, NoopMetricsCollector};

//! Resilience patterns for non-streaming operations.
//!
//! Retry with exponential backoff applies to buffered CRUD requests only.
//! Reply streams are never retried: a failed stream surfaces its transport
//! error and the caller decides whether to start a new one.

mod retry;

pub use retry::{RetryConfig, RetryExecutor};

//! Streaming response decoding.
//!
//! Reply streams from the assistant endpoints mix small JSON control frames
//! (session announcement, status marker, text delta) with spans of literal
//! UTF-8 text. This module decodes that wire format incrementally:
//!
//! - [`scanner`] finds a complete JSON object anchored at the buffer start,
//!   tracking brace depth and string escape state.
//! - [`frame`] classifies a recognized object.
//! - [`decoder`] owns the per-stream state and turns bytes into events.
//! - [`reply`] wraps a response body as an async [`ReplyStream`] with
//!   cancellation support.

pub mod decoder;
pub mod frame;
pub mod reply;
pub mod scanner;

pub use decoder::{ReplyDecoder, ReplyEvent, ReplyOutcome};
pub use frame::Frame;
pub use reply::{CancelHandle, ReplyStream};

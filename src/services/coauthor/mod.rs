//! Heuristic co-writing sessions.
//!
//! The co-author flow drafts section content through a guided exchange: the
//! backend streams clarifying questions (status `"ask"`) until it has enough
//! to produce a draft (status `"draft"`). The decoder is shared with the
//! help service; only the endpoints and request shapes differ.

mod service;
mod types;


pub use service::{CoauthorService, CoauthorServiceImpl};
pub use types::{CoauthorTurnRequest, StartWritingRequest};

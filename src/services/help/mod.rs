//! Writing-help sessions.
//!
//! A help session is a streamed conversation about one document section:
//! the caller describes what they need help with, the backend answers as a
//! reply stream, and follow-up turns reuse the session id announced in the
//! first stream.

mod service;
mod types;
mod validation;


pub use service::{HelpService, HelpServiceImpl};
pub use types::{HelpTurnRequest, StartHelpRequest};

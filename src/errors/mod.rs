//! Error types for the Draftsmith API client.
//!
//! This module provides the error taxonomy shared by every service: transport
//! failures surface as errors, decode ambiguity inside a reply stream never does.

mod error;

pub use error::{DraftsmithError, DraftsmithResult, ValidationDetail};

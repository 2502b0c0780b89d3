//! Improvement drafts: create, review, merge or discard.

mod service;
mod types;


pub use service::{DraftsService, DraftsServiceImpl};
pub use types::{CreateDraftRequest, DraftStatus, ImprovementDraft};

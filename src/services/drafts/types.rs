//! Type definitions for the improvement-draft endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an improvement draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Awaiting review
    Pending,
    /// Merged into the document section
    Merged,
    /// Rejected without merging
    Discarded,
}

/// A proposed replacement for one document section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementDraft {
    /// Draft identifier
    pub id: String,
    /// Document the draft targets
    pub document_id: String,
    /// Section node the draft targets
    pub node_id: String,
    /// Proposed HTML content
    pub content: String,
    /// Current lifecycle state
    pub status: DraftStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Request to create a draft for a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDraftRequest {
    /// Target document
    pub document_id: String,
    /// Target section node
    pub node_id: String,
    /// Proposed HTML content
    pub content: String,
}

impl CreateDraftRequest {
    /// Create a draft request
    pub fn new(
        document_id: impl Into<String>,
        node_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            node_id: node_id.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DraftStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::from_str::<DraftStatus>("\"merged\"").unwrap(),
            DraftStatus::Merged
        );
    }
}

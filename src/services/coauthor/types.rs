//! Request types for the co-author endpoints.

use crate::types::Attachment;
use serde::{Deserialize, Serialize};

/// Request to start co-writing a document section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartWritingRequest {
    /// Document being written
    pub document_id: String,
    /// Section node being written
    pub node_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional brief steering the first draft
    pub brief: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional file attached as source material
    pub attachment: Option<Attachment>,
}

impl StartWritingRequest {
    /// Create a new start-writing request
    pub fn new(document_id: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            node_id: node_id.into(),
            brief: None,
            attachment: None,
        }
    }

    /// Set a brief steering the draft
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = Some(brief.into());
        self
    }

    /// Attach source material
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

/// An answer to the backend's clarifying question within a writing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoauthorTurnRequest {
    /// Session to continue
    pub session_id: String,
    /// The user's answer for this turn
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Message this turn responds to, if the backend announced one
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional file attached to the turn
    pub attachment: Option<Attachment>,
}

impl CoauthorTurnRequest {
    /// Create a new turn
    pub fn new(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            message: message.into(),
            message_id: None,
            attachment: None,
        }
    }

    /// Set the message id this turn responds to
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    /// Attach a file to the turn
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

//! Request types for the writing-help endpoints.

use crate::types::Attachment;
use serde::{Deserialize, Serialize};

/// Request to start a writing-help session for a document section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartHelpRequest {
    /// Document the session is about
    pub document_id: String,
    /// Section node the session is about
    pub node_id: String,
    /// What the user wants help with
    pub help_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional file attached to the request
    pub attachment: Option<Attachment>,
}

impl StartHelpRequest {
    /// Create a new start-session request
    pub fn new(
        document_id: impl Into<String>,
        node_id: impl Into<String>,
        help_text: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            node_id: node_id.into(),
            help_text: help_text.into(),
            attachment: None,
        }
    }

    /// Attach a file to the request
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

/// A follow-up turn within an existing help session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpTurnRequest {
    /// Session to continue, as announced by the first reply stream
    pub session_id: String,
    /// The user's message for this turn
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Message this turn responds to, if the backend announced one
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional file attached to the turn
    pub attachment: Option<Attachment>,
}

impl HelpTurnRequest {
    /// Create a new follow-up turn
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

//! Type definitions for the documents endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full document with its section tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: String,
    /// Document title
    pub title: String,
    /// Sections in display order
    pub sections: Vec<Section>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A section node within a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Node identifier within the document
    pub node_id: String,
    /// Section heading
    pub heading: String,
    /// Rich-text content as HTML
    pub content: String,
    /// Position among siblings
    pub position: u32,
}

/// Summary returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document identifier
    pub id: String,
    /// Document title
    pub title: String,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Partial update of one section; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New heading
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New HTML content
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New position among siblings
    pub position: Option<u32>,
}

impl UpdateSectionRequest {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the position
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.heading.is_none() && self.content.is_none() && self.position.is_none()
    }
}

/// Request to register an uploaded file with the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAttachmentRequest {
    /// Original file name
    pub name: String,
    /// File size in bytes
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// MIME type if known
    pub content_type: Option<String>,
}

impl RegisterAttachmentRequest {
    /// Create a registration request
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            content_type: None,
        }
    }

    /// Set the MIME type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

//! Common types shared across services.

use serde::{Deserialize, Serialize};

/// An uploaded file referenced by a chat turn or a document section.
///
/// The decoder and the backend treat attachments as opaque; no validation
/// is performed beyond presence of the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Storage key assigned at upload time
    pub key: String,
    /// Original file name
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// Public URL of the stored file
    pub file_url: String,
}

impl Attachment {
    /// Create an attachment reference
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        size: u64,
        file_url: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            size,
            file_url: file_url.into(),
        }
    }
}

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageParams {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub page_size: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

/// A single page of results from a list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: u64,
    /// The page number that was returned
    pub page: u32,
    /// Items per page
    pub page_size: u32,
}

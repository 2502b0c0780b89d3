//! Documents service implementation.
//!
//! Buffered CRUD calls, executed through the retry policy. Streaming
//! endpoints never go through this path.

use super::types::{
    Document, DocumentSummary, RegisterAttachmentRequest, Section, UpdateSectionRequest,
};
use crate::auth::AuthManager;
use crate::errors::{DraftsmithError, DraftsmithResult, ValidationDetail};
use crate::resilience::RetryExecutor;
use crate::transport::HttpTransport;
use crate::types::{Attachment, Page, PageParams};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;
use url::Url;

/// Documents service trait for testability
#[async_trait]
pub trait DocumentsService: Send + Sync {
    /// Fetch a document with its sections
    async fn get(&self, document_id: &str) -> DraftsmithResult<Document>;

    /// List documents, paged
    async fn list(&self, params: PageParams) -> DraftsmithResult<Page<DocumentSummary>>;

    /// Update fields of one section
    async fn update_section(
        &self,
        document_id: &str,
        node_id: &str,
        request: UpdateSectionRequest,
    ) -> DraftsmithResult<Section>;

    /// Delete one section
    async fn delete_section(&self, document_id: &str, node_id: &str) -> DraftsmithResult<()>;

    /// Register an uploaded file and obtain its attachment reference
    async fn register_attachment(
        &self,
        request: RegisterAttachmentRequest,
    ) -> DraftsmithResult<Attachment>;
}

/// Implementation of the documents service
pub struct DocumentsServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
    retry: RetryExecutor,
}

impl DocumentsServiceImpl {
    /// Create a new documents service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        base_url: Url,
        retry: RetryExecutor,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            base_url,
            retry,
        }
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.auth_manager.add_auth_headers(&mut headers);
        headers
    }

    async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> DraftsmithResult<T> {
        let url = self.base_url.join(path)?.to_string();
        let headers = self.build_headers();

        let response = self
            .retry
            .execute(operation, || {
                self.transport
                    .execute(method.clone(), url.clone(), headers.clone(), body.clone())
            })
            .await?;

        Ok(serde_json::from_slice(&response.body)?)
    }
}

#[async_trait]
impl DocumentsService for DocumentsServiceImpl {
    async fn get(&self, document_id: &str) -> DraftsmithResult<Document> {
        let path = format!("/api/documents/{}", document_id);
        self.request_json("documents.get", Method::GET, &path, None)
            .await
    }

    async fn list(&self, params: PageParams) -> DraftsmithResult<Page<DocumentSummary>> {
        let path = format!(
            "/api/documents?page={}&page_size={}",
            params.page, params.page_size
        );
        self.request_json("documents.list", Method::GET, &path, None)
            .await
    }

    async fn update_section(
        &self,
        document_id: &str,
        node_id: &str,
        request: UpdateSectionRequest,
    ) -> DraftsmithResult<Section> {
        if request.is_empty() {
            return Err(DraftsmithError::Validation {
                message: "Empty section update".to_string(),
                details: vec![ValidationDetail::new(
                    "request",
                    "at least one field must be set",
                )],
            });
        }

        let path = format!("/api/documents/{}/sections/{}", document_id, node_id);
        let body = serde_json::to_vec(&request)?;
        self.request_json("documents.update_section", Method::PATCH, &path, Some(body))
            .await
    }

    async fn delete_section(&self, document_id: &str, node_id: &str) -> DraftsmithResult<()> {
        let path = format!("/api/documents/{}/sections/{}", document_id, node_id);
        let url = self.base_url.join(&path)?.to_string();
        let headers = self.build_headers();

        self.retry
            .execute("documents.delete_section", || {
                self.transport
                    .execute(Method::DELETE, url.clone(), headers.clone(), None)
            })
            .await?;

        Ok(())
    }

    async fn register_attachment(
        &self,
        request: RegisterAttachmentRequest,
    ) -> DraftsmithResult<Attachment> {
        if request.name.is_empty() {
            return Err(DraftsmithError::Validation {
                message: "Invalid attachment registration".to_string(),
                details: vec![ValidationDetail::new("name", "must not be empty")],
            });
        }

        let body = serde_json::to_vec(&request)?;
        self.request_json(
            "documents.register_attachment",
            Method::POST,
            "/api/documents/attachments",
            Some(body),
        )
        .await
    }
}

//! Drafts service implementation.

use super::types::{CreateDraftRequest, ImprovementDraft};
use crate::auth::AuthManager;
use crate::errors::{DraftsmithError, DraftsmithResult, ValidationDetail};
use crate::resilience::RetryExecutor;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;
use url::Url;

/// Drafts service trait for testability
#[async_trait]
pub trait DraftsService: Send + Sync {
    /// Create a draft proposing new content for a section
    async fn create(&self, request: CreateDraftRequest) -> DraftsmithResult<ImprovementDraft>;

    /// Fetch a draft
    async fn get(&self, draft_id: &str) -> DraftsmithResult<ImprovementDraft>;

    /// Merge the draft into its target section
    async fn merge(&self, draft_id: &str) -> DraftsmithResult<ImprovementDraft>;

    /// Discard the draft without merging
    async fn discard(&self, draft_id: &str) -> DraftsmithResult<ImprovementDraft>;
}

/// Implementation of the drafts service
pub struct DraftsServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
    retry: RetryExecutor,
}

impl DraftsServiceImpl {
    /// Create a new drafts service
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

    async fn request_draft(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> DraftsmithResult<ImprovementDraft> {
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

fn validate_create(request: &CreateDraftRequest) -> DraftsmithResult<()> {
    let mut details = Vec::new();

    if request.document_id.trim().is_empty() {
        details.push(ValidationDetail::new("document_id", "must not be empty"));
    }
    if request.node_id.trim().is_empty() {
        details.push(ValidationDetail::new("node_id", "must not be empty"));
    }
    if request.content.trim().is_empty() {
        details.push(ValidationDetail::new("content", "must not be empty"));
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(DraftsmithError::Validation {
            message: "Invalid draft request".to_string(),
            details,
        })
    }
}

#[async_trait]
impl DraftsService for DraftsServiceImpl {
    async fn create(&self, request: CreateDraftRequest) -> DraftsmithResult<ImprovementDraft> {
        validate_create(&request)?;

        let body = serde_json::to_vec(&request)?;
        self.request_draft("drafts.create", Method::POST, "/api/drafts", Some(body))
            .await
    }

    async fn get(&self, draft_id: &str) -> DraftsmithResult<ImprovementDraft> {
        let path = format!("/api/drafts/{}", draft_id);
        self.request_draft("drafts.get", Method::GET, &path, None)
            .await
    }

    async fn merge(&self, draft_id: &str) -> DraftsmithResult<ImprovementDraft> {
        let path = format!("/api/drafts/{}/merge", draft_id);
        self.request_draft("drafts.merge", Method::POST, &path, None)
            .await
    }

    async fn discard(&self, draft_id: &str) -> DraftsmithResult<ImprovementDraft> {
        let path = format!("/api/drafts/{}/discard", draft_id);
        self.request_draft("drafts.discard", Method::POST, &path, None)
            .await
    }
}

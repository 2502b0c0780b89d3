//! Co-author service implementation.

use super::types::{CoauthorTurnRequest, StartWritingRequest};
use crate::auth::AuthManager;
use crate::errors::{DraftsmithError, DraftsmithResult, ValidationDetail};
use crate::observability::MetricsCollector;
use crate::stream::ReplyStream;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;
use url::Url;

/// Co-author service trait for testability
#[async_trait]
pub trait CoauthorService: Send + Sync {
    /// Start a co-writing session for a section.
    async fn start_writing(&self, request: StartWritingRequest) -> DraftsmithResult<ReplyStream>;

    /// Answer the backend's clarifying question within a session.
    async fn send_response(&self, request: CoauthorTurnRequest) -> DraftsmithResult<ReplyStream>;
}

/// Implementation of the co-author service
pub struct CoauthorServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
    initial_status: String,
    metrics: Arc<dyn MetricsCollector>,
}

impl CoauthorServiceImpl {
    /// Create a new co-author service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        base_url: Url,
        initial_status: String,
        metrics: Arc<dyn MetricsCollector>,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            base_url,
            initial_status,
            metrics,
        }
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.auth_manager.add_auth_headers(&mut headers);
        headers
    }

    async fn open_stream(&self, path: &str, body: Vec<u8>) -> DraftsmithResult<ReplyStream> {
        let url = self.base_url.join(path)?;
        let headers = self.build_headers();

        tracing::debug!(path = path, "opening co-author reply stream");
        let stream = self
            .transport
            .execute_stream(Method::POST, url.to_string(), headers, Some(body))
            .await?;

        self.metrics
            .increment_counter("reply_streams_started", 1, &[("service", "coauthor")]);

        Ok(ReplyStream::new(stream, self.initial_status.clone())
            .with_metrics(self.metrics.clone()))
    }
}

#[async_trait]
impl CoauthorService for CoauthorServiceImpl {
    async fn start_writing(&self, request: StartWritingRequest) -> DraftsmithResult<ReplyStream> {
        let mut details = Vec::new();
        if request.document_id.is_empty() {
            details.push(ValidationDetail::new("document_id", "must not be empty"));
        }
        if request.node_id.is_empty() {
            details.push(ValidationDetail::new("node_id", "must not be empty"));
        }
        if !details.is_empty() {
            return Err(DraftsmithError::Validation {
                message: "Invalid start-writing request".to_string(),
                details,
            });
        }

        let body = serde_json::to_vec(&request)?;
        self.open_stream("/api/coauthor/sessions", body).await
    }

    async fn send_response(&self, request: CoauthorTurnRequest) -> DraftsmithResult<ReplyStream> {
        let mut details = Vec::new();
        if request.session_id.is_empty() {
            details.push(ValidationDetail::new("session_id", "must not be empty"));
        }
        if request.message.trim().is_empty() {
            details.push(ValidationDetail::new("message", "must not be blank"));
        }
        if !details.is_empty() {
            return Err(DraftsmithError::Validation {
                message: "Invalid co-author turn".to_string(),
                details,
            });
        }

        let path = format!("/api/coauthor/sessions/{}/messages", request.session_id);
        let body = serde_json::to_vec(&request)?;
        self.open_stream(&path, body).await
    }
}

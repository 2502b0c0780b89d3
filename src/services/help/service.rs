//! Writing-help service implementation.

use super::types::{HelpTurnRequest, StartHelpRequest};
use super::validation::{validate_help_turn_request, validate_start_help_request};
use crate::auth::AuthManager;
use crate::errors::DraftsmithResult;
use crate::observability::MetricsCollector;
use crate::stream::ReplyStream;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;
use url::Url;

/// Writing-help service trait for testability
#[async_trait]
pub trait HelpService: Send + Sync {
    /// Start a help session; the reply stream announces the session id.
    async fn start_session(&self, request: StartHelpRequest) -> DraftsmithResult<ReplyStream>;

    /// Send a follow-up turn within an existing session.
    async fn send_response(&self, request: HelpTurnRequest) -> DraftsmithResult<ReplyStream>;
}

/// Implementation of the writing-help service
pub struct HelpServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
    initial_status: String,
    metrics: Arc<dyn MetricsCollector>,
}

impl HelpServiceImpl {
    /// Create a new writing-help service
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

        tracing::debug!(path = path, "opening help reply stream");
        let stream = self
            .transport
            .execute_stream(Method::POST, url.to_string(), headers, Some(body))
            .await?;

        self.metrics
            .increment_counter("reply_streams_started", 1, &[("service", "help")]);

        Ok(ReplyStream::new(stream, self.initial_status.clone())
            .with_metrics(self.metrics.clone()))
    }
}

#[async_trait]
impl HelpService for HelpServiceImpl {
    async fn start_session(&self, request: StartHelpRequest) -> DraftsmithResult<ReplyStream> {
        validate_start_help_request(&request)?;
        let body = serde_json::to_vec(&request)?;
        self.open_stream("/api/help/sessions", body).await
    }

    async fn send_response(&self, request: HelpTurnRequest) -> DraftsmithResult<ReplyStream> {
        validate_help_turn_request(&request)?;
        let path = format!("/api/help/sessions/{}/messages", request.session_id);
        let body = serde_json::to_vec(&request)?;
        self.open_stream(&path, body).await
    }
}

//! Mock implementations for testing.
//!
//! Service tests substitute [`MockTransport`] for the real reqwest transport
//! and assert on the requests it records.

use crate::auth::AuthManager;
use crate::errors::{DraftsmithError, DraftsmithResult};
use crate::transport::{ByteStream, HttpResponse, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request captured by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: http::Method,
    /// Full request URL
    pub url: String,
    /// Request headers
    pub headers: http::HeaderMap,
    /// Request body bytes, if any
    pub body: Option<Vec<u8>>,
}

/// Mock HTTP transport with scripted responses
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<DraftsmithResult<HttpResponse>>>,
    streams: Mutex<VecDeque<DraftsmithResult<Vec<DraftsmithResult<Bytes>>>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Create an empty mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a buffered JSON response with the given status
    pub fn with_json_response(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers: http::HeaderMap::new(),
            body: Bytes::from(body.to_string()),
        }));
        self
    }

    /// Queue a buffered error
    pub fn with_error(self, error: DraftsmithError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queue a streaming response delivered as the given chunks
    pub fn with_stream<S: Into<String>>(self, chunks: Vec<S>) -> Self {
        let chunks = chunks
            .into_iter()
            .map(|c| Ok(Bytes::from(c.into())))
            .collect();
        self.streams.lock().unwrap().push_back(Ok(chunks));
        self
    }

    /// Queue a streaming response that fails mid-stream after `chunks`
    pub fn with_interrupted_stream<S: Into<String>>(
        self,
        chunks: Vec<S>,
        error: DraftsmithError,
    ) -> Self {
        let mut items: Vec<DraftsmithResult<Bytes>> = chunks
            .into_iter()
            .map(|c| Ok(Bytes::from(c.into())))
            .collect();
        items.push(Err(error));
        self.streams.lock().unwrap().push_back(Ok(items));
        self
    }

    /// Queue a streaming request that fails before any bytes arrive
    pub fn with_stream_error(self, error: DraftsmithError) -> Self {
        self.streams.lock().unwrap().push_back(Err(error));
        self
    }

    /// All requests recorded so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(
        &self,
        method: http::Method,
        url: String,
        headers: http::HeaderMap,
        body: Option<Vec<u8>>,
    ) -> DraftsmithResult<HttpResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url,
            headers,
            body,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(DraftsmithError::Internal {
                    message: "No mock response configured".to_string(),
                })
            })
    }

    async fn execute_stream(
        &self,
        method: http::Method,
        url: String,
        headers: http::HeaderMap,
        body: Option<Vec<u8>>,
    ) -> DraftsmithResult<ByteStream> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url,
            headers,
            body,
        });

        let chunks = self
            .streams
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(DraftsmithError::Internal {
                    message: "No mock stream configured".to_string(),
                })
            })?;

        Ok(Box::pin(futures::stream::iter(chunks)))
    }
}

/// Mock auth manager adding fixed test headers
pub struct MockAuthManager;

impl AuthManager for MockAuthManager {
    fn add_auth_headers(&self, headers: &mut http::HeaderMap) {
        headers.insert("authorization", "Bearer test-key".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());
    }

    fn validate_api_key(&self) -> Result<(), String> {
        Ok(())
    }
}

//! HTTP transport layer.
//!
//! The transport is the only component that talks to the network. Services
//! depend on the [`HttpTransport`] trait so tests can substitute canned
//! responses and byte streams.

mod http_transport;

use crate::errors::DraftsmithResult;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

pub use http_transport::ReqwestTransport;

/// A stream of raw response body bytes
pub type ByteStream = Pin<Box<dyn Stream<Item = DraftsmithResult<Bytes>> + Send>>;

/// HTTP response with a fully buffered body
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body bytes
    pub body: Bytes,
}

/// HTTP transport abstraction for the Draftsmith API.
///
/// Non-2xx responses are mapped into the error taxonomy before either method
/// returns, so callers only ever see successful payloads or typed errors.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a request and buffer the full response body
    async fn execute(
        &self,
        method: http::Method,
        url: String,
        headers: http::HeaderMap,
        body: Option<Vec<u8>>,
    ) -> DraftsmithResult<HttpResponse>;

    /// Execute a request and return the response body as a byte stream
    async fn execute_stream(
        &self,
        method: http::Method,
        url: String,
        headers: http::HeaderMap,
        body: Option<Vec<u8>>,
    ) -> DraftsmithResult<ByteStream>;
}

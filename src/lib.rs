//! # Draftsmith API Client
//!
//! Async Rust client for the Draftsmith document-authoring API.
//!
//! ## Features
//!
//! - Streaming assistant replies: writing-help and co-author sessions whose
//!   responses mix JSON control frames with literal text, decoded
//!   incrementally by [`ReplyStream`]
//! - Document and section CRUD, attachment registration, improvement drafts
//! - Built-in retry with exponential backoff for non-streaming operations
//! - Observability via `tracing` and a pluggable metrics collector
//! - Secure credential handling with `SecretString`
//! - Type-safe request/response models with mock support for testing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use draftsmith_client::{create_client, DraftsmithClient, DraftsmithConfig};
//! use draftsmith_client::StartHelpRequest;
//! use secrecy::SecretString;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DraftsmithConfig::builder()
//!         .api_key(SecretString::new("ds-...".to_string()))
//!         .build()?;
//!
//!     let client = create_client(config)?;
//!
//!     let request = StartHelpRequest::new("doc_1", "node_1", "Tighten the intro");
//!     let stream = client.help().start_session(request).await?;
//!
//!     let outcome = stream.process(|text| print!("{}", text)).await?;
//!     println!("\nsession: {:?}", outcome.session_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Main client interface and factory functions
//! - `config` - Configuration types and builder
//! - `auth` - Authentication and header management
//! - `transport` - HTTP transport layer and byte streaming
//! - `stream` - Reply-stream decoding (frames, scanner, decoder)
//! - `services` - Help, co-author, documents, and drafts endpoints
//! - `errors` - Error types and taxonomy
//! - `types` - Common types (Attachment, paging)
//! - `mocks` / `fixtures` - Test doubles and canned data

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod resilience;
pub mod services;
pub mod stream;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mocks;

/// Default base URL for the Draftsmith API
pub const DEFAULT_BASE_URL: &str = "https://api.draftsmith.dev";

/// Default request timeout in seconds; streams stay open for a long time
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Default maximum retries for non-streaming operations
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Status reported for a reply stream that never received a status frame
pub const DEFAULT_STATUS: &str = "ask";

pub use auth::{AuthManager, BearerAuthManager};
pub use client::{
    create_client, create_client_from_env, DraftsmithClient, DraftsmithClientImpl,
};
pub use config::{DraftsmithConfig, DraftsmithConfigBuilder};
pub use errors::{DraftsmithError, DraftsmithResult, ValidationDetail};
pub use observability::{
    InMemoryMetricsCollector, LogFormat, LogLevel, LoggingConfig, MetricsCollector,
    NoopMetricsCollector,
};
pub use resilience::{RetryConfig, RetryExecutor};
pub use stream::{CancelHandle, ReplyDecoder, ReplyEvent, ReplyOutcome, ReplyStream};
pub use transport::{ByteStream, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{Attachment, Page, PageParams};

pub use services::coauthor::{
    CoauthorService, CoauthorServiceImpl, CoauthorTurnRequest, StartWritingRequest,
};
pub use services::documents::{
    Document, DocumentSummary, DocumentsService, DocumentsServiceImpl,
    RegisterAttachmentRequest, Section, UpdateSectionRequest,
};
pub use services::drafts::{
    CreateDraftRequest, DraftStatus, DraftsService, DraftsServiceImpl, ImprovementDraft,
};
pub use services::help::{
    HelpService, HelpServiceImpl, HelpTurnRequest, StartHelpRequest,
};

//! Client interface and implementation for the Draftsmith API.

use crate::auth::{AuthManager, BearerAuthManager};
use crate::config::DraftsmithConfig;
use crate::errors::{DraftsmithError, DraftsmithResult};
use crate::observability::{MetricsCollector, NoopMetricsCollector};
use crate::resilience::{RetryConfig, RetryExecutor};
use crate::services::coauthor::{CoauthorService, CoauthorServiceImpl};
use crate::services::documents::{DocumentsService, DocumentsServiceImpl};
use crate::services::drafts::{DraftsService, DraftsServiceImpl};
use crate::services::help::{HelpService, HelpServiceImpl};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;
use url::Url;

/// Trait defining the main Draftsmith client interface
pub trait DraftsmithClient: Send + Sync {
    /// Writing-help chat sessions
    fn help(&self) -> Arc<dyn HelpService>;

    /// Co-author writing sessions
    fn coauthor(&self) -> Arc<dyn CoauthorService>;

    /// Document and section CRUD
    fn documents(&self) -> Arc<dyn DocumentsService>;

    /// Improvement drafts
    fn drafts(&self) -> Arc<dyn DraftsService>;
}

/// Implementation of the Draftsmith client
pub struct DraftsmithClientImpl {
    config: Arc<DraftsmithConfig>,
    help: Arc<dyn HelpService>,
    coauthor: Arc<dyn CoauthorService>,
    documents: Arc<dyn DocumentsService>,
    drafts: Arc<dyn DraftsService>,
}

impl DraftsmithClientImpl {
    /// Create a new client from configuration
    pub fn new(config: DraftsmithConfig) -> DraftsmithResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?) as Arc<dyn HttpTransport>;

        let auth_manager =
            Arc::new(BearerAuthManager::new(config.api_key.clone())) as Arc<dyn AuthManager>;

        auth_manager
            .validate_api_key()
            .map_err(|e| DraftsmithError::Configuration {
                message: format!("Invalid API key: {}", e),
            })?;

        Self::with_dependencies(config, transport, auth_manager, Arc::new(NoopMetricsCollector))
    }

    /// Create a new client with custom transport, auth manager, and metrics
    pub fn with_dependencies(
        config: DraftsmithConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        metrics: Arc<dyn MetricsCollector>,
    ) -> DraftsmithResult<Self> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| DraftsmithError::Configuration {
                message: format!("Invalid base URL '{}': {}", config.base_url, e),
            })?;

        let retry_config = RetryConfig {
            max_retries: config.max_retries,
            ..Default::default()
        };

        let help = Arc::new(HelpServiceImpl::new(
            transport.clone(),
            auth_manager.clone(),
            base_url.clone(),
            config.initial_status.clone(),
            metrics.clone(),
        ));

        let coauthor = Arc::new(CoauthorServiceImpl::new(
            transport.clone(),
            auth_manager.clone(),
            base_url.clone(),
            config.initial_status.clone(),
            metrics,
        ));

        let documents = Arc::new(DocumentsServiceImpl::new(
            transport.clone(),
            auth_manager.clone(),
            base_url.clone(),
            RetryExecutor::new(retry_config.clone()),
        ));

        let drafts = Arc::new(DraftsServiceImpl::new(
            transport,
            auth_manager,
            base_url,
            RetryExecutor::new(retry_config),
        ));

        Ok(Self {
            config: Arc::new(config),
            help,
            coauthor,
            documents,
            drafts,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &DraftsmithConfig {
        &self.config
    }
}

impl DraftsmithClient for DraftsmithClientImpl {
    fn help(&self) -> Arc<dyn HelpService> {
        self.help.clone()
    }

    fn coauthor(&self) -> Arc<dyn CoauthorService> {
        self.coauthor.clone()
    }

    fn documents(&self) -> Arc<dyn DocumentsService> {
        self.documents.clone()
    }

    fn drafts(&self) -> Arc<dyn DraftsService> {
        self.drafts.clone()
    }
}

/// Create a new Draftsmith client from configuration
pub fn create_client(config: DraftsmithConfig) -> DraftsmithResult<DraftsmithClientImpl> {
    DraftsmithClientImpl::new(config)
}

/// Create a new Draftsmith client from environment variables
pub fn create_client_from_env() -> DraftsmithResult<DraftsmithClientImpl> {
    let config = DraftsmithConfig::from_env()?;
    create_client(config)
}

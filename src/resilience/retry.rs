use crate::errors::DraftsmithError;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the initial try
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Upper bound on any computed delay
    pub max_backoff: Duration,
    /// Multiplier applied per attempt
    pub backoff_multiplier: f64,
    /// Jitter fraction applied to each delay
    pub jitter: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(60),
            backoff_multiplier: 2.0,
            jitter: 0.1,
        }
    }
}

impl RetryConfig {
    /// A configuration that never retries.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }
}

/// Retry executor that handles retry logic with exponential backoff
pub struct RetryExecutor {
    config: RetryConfig,
}

impl RetryExecutor {
    /// Create a new retry executor with the given configuration
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Execute the given operation with retry logic.
    ///
    /// Non-retryable errors are returned immediately; retryable ones are
    /// retried up to `max_retries` times with exponential backoff, honoring
    /// a server-provided retry-after when it is longer.
    pub async fn execute<F, Fut, T>(&self, operation: &str, f: F) -> Result<T, DraftsmithError>
    where
        F: Fn() -> Fut + Send,
        Fut: Future<Output = Result<T, DraftsmithError>> + Send,
        T: Send,
    {
        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.config.max_retries {
            attempt += 1;

            match f().await {
                Ok(result) => return Ok(result),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => {
                    let delay = self.calculate_backoff(attempt, e.retry_after());
                    last_error = Some(e);

                    if attempt > self.config.max_retries {
                        break;
                    }

                    tracing::debug!(
                        operation = operation,
                        attempt = attempt,
                        delay_ms = delay.as_millis() as u64,
                        "retrying after retryable error"
                    );
                    sleep(delay).await;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| DraftsmithError::Internal {
            message: format!("Retry loop for '{}' ended without an error", operation),
        }))
    }

    /// Calculate the backoff delay for a given attempt
    fn calculate_backoff(&self, attempt: u32, server_retry_after: Option<Duration>) -> Duration {
        let base_delay = self.config.initial_backoff.as_millis() as f64
            * self.config.backoff_multiplier.powi((attempt - 1) as i32);

        let jitter_range = base_delay * self.config.jitter;
        let jitter = rand::random::<f64>() * jitter_range * 2.0 - jitter_range;
        let delay_ms = (base_delay + jitter).min(self.config.max_backoff.as_millis() as f64);

        let calculated = Duration::from_millis(delay_ms.max(100.0) as u64);

        match server_retry_after {
            Some(server_delay) if server_delay > calculated => server_delay,
            _ => calculated,
        }
    }
}

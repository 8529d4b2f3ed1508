//! Exponential backoff for HTTP collaborators

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::errors::HttpApiError;

/// Retry policy configuration for handling transient errors
///
/// Backoff doubles with each retry and is capped at `max_backoff_ms`.
/// Only transient errors (429, 5xx, network) are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts (0 disables retrying)
    max_retries: u32,
    /// Initial backoff duration in milliseconds
    initial_backoff_ms: u64,
    /// Maximum backoff duration in milliseconds
    max_backoff_ms: u64,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_backoff_ms: u64, max_backoff_ms: u64) -> Self {
        Self {
            max_retries,
            initial_backoff_ms,
            max_backoff_ms: max_backoff_ms.max(initial_backoff_ms),
        }
    }

    /// A policy that never retries
    pub fn none() -> Self {
        Self::new(0, 0, 0)
    }

    /// Execute an operation with exponential backoff retry logic
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, HttpApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, HttpApiError>>,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => {
                    if attempt > 0 {
                        debug!("Operation succeeded after {} retries", attempt);
                    }
                    return Ok(result);
                }
                Err(err) => {
                    if self.should_retry(&err, attempt) {
                        let backoff = self.calculate_backoff(attempt);
                        warn!(
                            "Attempt {} failed with transient error: {}. Retrying in {:?}...",
                            attempt + 1,
                            err,
                            backoff
                        );

                        sleep(backoff).await;
                        attempt += 1;
                    } else {
                        if attempt >= self.max_retries && err.is_transient() {
                            warn!("Operation failed after {} attempts: {}", attempt + 1, err);
                        } else {
                            debug!("Permanent error, not retrying: {}", err);
                        }
                        return Err(err);
                    }
                }
            }
        }
    }

    /// Formula: min(initial_backoff * 2^attempt, max_backoff)
    fn calculate_backoff(&self, attempt: u32) -> Duration {
        let backoff_ms = self
            .initial_backoff_ms
            .saturating_mul(2_u64.saturating_pow(attempt))
            .min(self.max_backoff_ms);

        Duration::from_millis(backoff_ms)
    }

    fn should_retry(&self, error: &HttpApiError, attempt: u32) -> bool {
        attempt < self.max_retries && error.is_transient()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, 1_000, 30_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn server_error() -> HttpApiError {
        HttpApiError::ServerError(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string())
    }

    #[test]
    fn test_backoff_calculation() {
        let policy = RetryPolicy::new(5, 1000, 6000);

        assert_eq!(policy.calculate_backoff(0), Duration::from_millis(1000));
        assert_eq!(policy.calculate_backoff(1), Duration::from_millis(2000));
        assert_eq!(policy.calculate_backoff(2), Duration::from_millis(4000));
        assert_eq!(policy.calculate_backoff(3), Duration::from_millis(6000));
        assert_eq!(policy.calculate_backoff(40), Duration::from_millis(6000));
    }

    #[test]
    fn test_should_retry() {
        let policy = RetryPolicy::new(2, 10, 100);

        assert!(policy.should_retry(&HttpApiError::RateLimitExceeded, 0));
        assert!(policy.should_retry(&server_error(), 1));
        assert!(!policy.should_retry(&server_error(), 2));
        assert!(!policy.should_retry(&HttpApiError::InvalidRequest("bad".into()), 0));
    }

    #[tokio::test]
    async fn test_execute_succeeds_after_transient_failures() {
        let policy = RetryPolicy::new(3, 1, 5);
        let calls = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&calls);
        let result = policy
            .execute(|| {
                let counter = Arc::clone(&counter);
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(server_error())
                    } else {
                        Ok("done")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_execute_gives_up_on_permanent_error() {
        let policy = RetryPolicy::new(3, 1, 5);
        let calls = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&calls);
        let result: Result<(), _> = policy
            .execute(|| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err(HttpApiError::Unauthorized(StatusCode::UNAUTHORIZED))
                }
            })
            .await;

        assert!(matches!(result, Err(HttpApiError::Unauthorized(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_execute_stops_after_max_retries() {
        let policy = RetryPolicy::new(2, 1, 2);
        let calls = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&calls);
        let result: Result<(), _> = policy
            .execute(|| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err(HttpApiError::RateLimitExceeded)
                }
            })
            .await;

        assert!(matches!(result, Err(HttpApiError::RateLimitExceeded)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}

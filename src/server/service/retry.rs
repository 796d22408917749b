use std::{future::Future, time::Duration};

use dioxus_logger::tracing;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Retry policy for service operations that talk to flaky collaborators
#[derive(Clone, Copy, Debug)]
pub struct RetryContext {
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts, doubled after each failed attempt
    initial_backoff: Duration,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }

    /// Creates a context with a custom policy, at least one attempt is always made
    pub fn with_policy(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
        }
    }

    /// Execute an operation with automatic retry logic
    ///
    /// The operation is retried with exponential backoff while it fails with an error whose
    /// [`Error::to_retry_strategy`] is [`ErrorRetryStrategy::Retry`] and attempts remain.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "geolocation lookup")
    /// - `operation`: Produces a fresh future for each attempt
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        mut operation: F,
    ) -> Result<R, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::warn!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::debug!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}

//! Retry with exponential back-off and jitter for store clients.
//!
//! Only the HTTP client retries; [`crate::retrieve`] itself never does. Errors
//! that a second attempt cannot fix are returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::StoreError;

const MAX_DELAY_MS: u64 = 30_000;

/// Returns `true` for errors worth retrying after a back-off delay.
///
/// **Retriable:** timeouts, connection failures, HTTP 429 and 5xx.
///
/// **Not retriable:** other statuses, undecodable bodies, file and
/// configuration errors.
pub(crate) fn is_retriable(err: &StoreError) -> bool {
    match err {
        StoreError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        StoreError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        StoreError::Deserialize { .. } | StoreError::Io { .. } | StoreError::Config(_) => false,
    }
}

/// Back-off settings for one store client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RetryPolicy {
    /// Extra attempts after the first one.
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based), before jitter:
    /// `backoff_base_ms x 2^(retry-1)`, capped at 30 s.
    pub(crate) fn base_delay_ms(self, retry: u32) -> u64 {
        let doublings = retry.saturating_sub(1).min(10);
        self.backoff_base_ms
            .saturating_mul(1u64 << doublings)
            .min(MAX_DELAY_MS)
    }

    /// Run `operation`, retrying transient failures. `target` names the
    /// endpoint in retry logs.
    pub(crate) async fn run<T, F, Fut>(
        self,
        target: &str,
        mut operation: F,
    ) -> Result<T, StoreError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        let mut retry = 0u32;
        loop {
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };
            if retry >= self.max_retries || !is_retriable(&err) {
                return Err(err);
            }
            retry += 1;

            // Jitter factor in [0.75, 1.25).
            let jitter = 0.75 + rand::random::<f64>() / 2.0;
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let delay_ms = (self.base_delay_ms(retry) as f64 * jitter) as u64;
            tracing::warn!(
                store = target,
                retry,
                max_retries = self.max_retries,
                delay_ms,
                error = %err,
                "candidate query failed, backing off"
            );
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}

use crate::utils::error::Result;
use std::future::Future;
use std::time::Duration;

/// Bounded retry with linear backoff: attempt `n` is followed by a pause of
/// `n * base_delay` before attempt `n + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Pause that follows the given (1-based) failed attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

pub async fn retry_async<T, F, Fut>(policy: &RetryPolicy, label: &str, mut op: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!("✅ {} succeeded on attempt {}/{}", label, attempt, max_attempts);
                }
                return Ok(value);
            }
            Err(e) if attempt >= max_attempts => {
                tracing::error!("❌ {} failed after {} attempts: {}", label, attempt, e);
                return Err(e);
            }
            Err(e) => {
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    "⚠️ {} attempt {}/{} failed: {} (retrying in {:?})",
                    label,
                    attempt,
                    max_attempts,
                    e,
                    delay
                );
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BridgeError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn failure(attempt: u32) -> BridgeError {
        BridgeError::RemoteError {
            status: Some(503),
            body: None,
            message: format!("attempt {}", attempt),
        }
    }

    #[test]
    fn test_delay_grows_linearly() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(1), Duration::from_secs(1));
        assert_eq!(policy.delay_for(2), Duration::from_secs(2));
        assert_eq!(policy.delay_for(3), Duration::from_secs(3));
    }

    #[test]
    fn test_new_clamps_zero_attempts() {
        let policy = RetryPolicy::new(0, Duration::ZERO);
        assert_eq!(policy.max_attempts, 1);
    }

    #[tokio::test]
    async fn test_stops_at_max_attempts_and_returns_last_error() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::ZERO);

        let result: Result<()> = retry_async(&policy, "submit", |attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Err(failure(attempt)) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        match result {
            Err(BridgeError::RemoteError { message, .. }) => assert_eq!(message, "attempt 3"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_returns_first_success() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(5, Duration::ZERO);

        let result = retry_async(&policy, "submit", |attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 2 {
                    Err(failure(attempt))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(result, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}

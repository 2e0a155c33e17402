// Retry logic with exponential backoff

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

use super::GenerationError;

const BASE_DELAY_MS: u64 = 500;

/// Run `f` up to `max_attempts` times, backing off exponentially between
/// attempts. Non-retryable errors are returned immediately.
pub async fn with_retry<F, Fut, T>(max_attempts: u32, f: F) -> Result<T, GenerationError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, GenerationError>>,
{
    let attempts = max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                attempt += 1;
                if attempt >= attempts || !e.is_retryable() {
                    return Err(e);
                }

                let delay = Duration::from_millis(BASE_DELAY_MS * 2u64.pow(attempt - 1));
                tracing::warn!(
                    "Generation request failed (attempt {}/{}), retrying in {:?}: {}",
                    attempt,
                    attempts,
                    delay,
                    e
                );
                sleep(delay).await;
            }
        }
    }
}

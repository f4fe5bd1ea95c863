//! Retry Policy
//!
//! Bounded retries with capped exponential backoff, applied explicitly at
//! each call site that talks to the ledger.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::info;

// == Retry Policy ==
/// How many times to try an operation and how long to wait between tries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Wait after the first failed attempt
    pub initial_backoff: Duration,
    /// Upper bound for any single wait
    pub max_backoff: Duration,
    /// Growth factor between consecutive waits
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(10),
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Policy that retries without waiting, for tests and local tooling.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            multiplier: 1,
        }
    }

    // == Backoff ==
    /// Wait before the attempt following failed attempt number `attempt` (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    // == Run ==
    /// Runs `op` until it succeeds, fails with an error `should_retry` rejects,
    /// or `max_attempts` is used up. The last error is returned unchanged.
    pub async fn run<T, E, F, Fut, P>(&self, label: &str, should_retry: P, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: Display,
    {
        let mut attempt = 1;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_attempts && should_retry(&err) => {
                    let delay = self.backoff_for(attempt);
                    info!(
                        error = %err,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying {}: attempt {}",
                        label,
                        attempt
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

//! Fixed-delay retry loop.
//!
//! [`retry`] knows nothing about HTTP: it drives any closure producing a
//! future of `Result<T, E>` and stops at the first `Ok`.

use crate::{Config, Error, Result};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// How many times to attempt an operation and how long to pause in between.
///
/// # Examples
///
/// ```
/// use pokefetch::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(3, Duration::from_secs(2));
/// assert_eq!(policy.max_attempts(), 3);
///
/// // Always at least one attempt.
/// assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: usize,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy. `max_attempts` is clamped to at least 1.
    pub fn new(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// The maximum number of attempts.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The pause between a failed attempt and the next one.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RetryPolicy {
    fn from(config: &Config) -> Self {
        Self::new(config.max_attempts, config.retry_delay)
    }
}

/// Runs `attempt` until it succeeds or `policy.max_attempts()` is reached.
///
/// The closure receives the 1-indexed attempt number. On success the value is
/// returned together with the number of attempts it took. Between a failure
/// and the next attempt the task sleeps for `policy.delay()`; there is no
/// pause after the last attempt. When every attempt fails the result is
/// [`Error::TimedOut`] and the individual errors are dropped after logging.
///
/// # Examples
///
/// ```
/// use pokefetch::{retry, RetryPolicy};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let policy = RetryPolicy::new(3, Duration::from_millis(1));
///
/// let (value, attempts) = retry(&policy, |attempt| async move {
///     if attempt < 2 { Err("not yet") } else { Ok(attempt * 10) }
/// })
/// .await
/// .unwrap();
///
/// assert_eq!(value, 20);
/// assert_eq!(attempts, 2);
/// # }
/// ```
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, mut attempt: F) -> Result<(T, usize)>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Display,
{
    for n in 1..=policy.max_attempts {
        match attempt(n).await {
            Ok(value) => return Ok((value, n)),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    attempt = n,
                    max_attempts = policy.max_attempts,
                    "Attempt failed"
                );

                if n < policy.max_attempts {
                    tracing::info!(
                        delay_ms = policy.delay.as_millis(),
                        attempt = n,
                        "Retrying after delay"
                    );
                    tokio::time::sleep(policy.delay).await;
                }
            }
        }
    }

    tracing::error!(
        attempts = policy.max_attempts,
        "Giving up, no attempt succeeded"
    );

    Err(Error::TimedOut {
        attempts: policy.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_stops_after_first_success() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        let mut calls = 0;

        let result = retry(&policy, |_| {
            calls += 1;
            async { Ok::<_, String>("done") }
        })
        .await
        .unwrap();

        assert_eq!(result, ("done", 1));
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_calls_max_attempts_when_all_fail() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        let mut calls = 0;

        let result: Result<((), usize)> = retry(&policy, |_| {
            calls += 1;
            async { Err("boom") }
        })
        .await;

        assert!(matches!(result, Err(Error::TimedOut { attempts: 3 })));
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_succeeds_on_last_attempt() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1));
        let mut seen = Vec::new();

        let (value, attempts) = retry(&policy, |n| {
            seen.push(n);
            async move {
                if n == 3 {
                    Ok(n)
                } else {
                    Err(format!("attempt {} failed", n))
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(value, 3);
        assert_eq!(attempts, 3);
        assert_eq!(seen, [1, 2, 3]);
    }

    #[tokio::test]
    async fn test_pauses_between_failures_only() {
        let delay = Duration::from_millis(100);
        let policy = RetryPolicy::new(3, delay);

        let start = Instant::now();
        let result: Result<((), usize)> = retry(&policy, |_| async { Err("boom") }).await;
        let elapsed = start.elapsed();

        assert!(result.is_err());
        // Two pauses for three attempts.
        assert!(elapsed >= delay * 2, "Expected at least 200ms, got {:?}", elapsed);
        assert!(elapsed < delay * 3, "Expected less than 300ms, got {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let policy = RetryPolicy::new(0, Duration::ZERO);
        let mut calls = 0;

        let result: Result<((), usize)> = retry(&policy, |_| {
            calls += 1;
            async { Err("boom") }
        })
        .await;

        assert!(matches!(result, Err(Error::TimedOut { attempts: 1 })));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_policy_from_config() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay(), Duration::from_secs(2));
    }
}

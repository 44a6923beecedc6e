/*!
 * Retry, backoff, and pacing for live translation calls.
 *
 * The live backend is the only component allowed to fail transiently, and
 * every failure is absorbed here: rate-limit signals back off exponentially,
 * other errors retry on a flat delay, and exhausted retries are reported to
 * the caller, which keeps the original text. All waiting goes through the
 * [`Sleeper`] trait so tests can observe delays without real time passing.
 */

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, warn};
use parking_lot::Mutex;

use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// Timed-retry policy for the translation client.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts against the backend
    pub max_attempts: u32,

    /// Delay before the first retry
    pub initial_delay: Duration,

    /// Factor applied to the delay after each rate-limit signal
    pub backoff_multiplier: u32,

    /// Fixed delay after every successful call, to stay under external
    /// rate limits regardless of retry history
    pub pacing_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(10),
            backoff_multiplier: 2,
            pacing_delay: Duration::from_secs(2),
        }
    }
}

/// Abstraction over blocking waits, injected so retry behavior is testable
/// without real delays.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Test sleeper that records requested delays instead of waiting.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    /// Create a recording sleeper.
    pub fn new() -> Self {
        Self::default()
    }

    /// All delays requested so far, in order.
    pub fn recorded(&self) -> Vec<Duration> {
        self.delays.lock().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().push(duration);
    }
}

/// Wraps a translation backend with bounded retry, exponential backoff on
/// rate limiting, and post-success pacing. Never propagates an error:
/// exhausted retries yield `None` so the caller can keep the original text
/// without mistaking it for a translation.
pub struct TranslationClient {
    backend: Arc<dyn TranslationBackend>,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl TranslationClient {
    /// Create a client with the tokio sleeper.
    pub fn new(backend: Arc<dyn TranslationBackend>, policy: RetryPolicy) -> Self {
        Self::with_sleeper(backend, policy, Arc::new(TokioSleeper))
    }

    /// Create a client with an injected sleeper.
    pub fn with_sleeper(
        backend: Arc<dyn TranslationBackend>,
        policy: RetryPolicy,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self { backend, policy, sleeper }
    }

    /// The configured retry policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Translate `text`, returning `None` when the backend cannot be
    /// reached within the retry budget.
    pub async fn try_translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Option<String> {
        let mut delay = self.policy.initial_delay;

        for attempt in 1..=self.policy.max_attempts {
            match self.backend.translate(text, source_language, target_language).await {
                Ok(translated) => {
                    debug!(
                        "Translated on attempt {}/{}: '{}'",
                        attempt,
                        self.policy.max_attempts,
                        truncate_text(text, 60)
                    );
                    self.sleeper.sleep(self.policy.pacing_delay).await;
                    return Some(translated);
                }
                Err(e) if e.is_rate_limit() => {
                    warn!(
                        "Rate limit hit on attempt {}/{}, waiting {:?}: {}",
                        attempt, self.policy.max_attempts, delay, e
                    );
                    self.sleeper.sleep(delay).await;
                    delay *= self.policy.backoff_multiplier;
                }
                Err(e) => {
                    error!(
                        "Translation error on attempt {}/{}: {}",
                        attempt, self.policy.max_attempts, e
                    );
                    if attempt == self.policy.max_attempts {
                        break;
                    }
                    self.sleeper.sleep(delay).await;
                }
            }
        }

        warn!(
            "Giving up after {} attempts, keeping original text: '{}'",
            self.policy.max_attempts,
            truncate_text(text, 60)
        );
        None
    }

    /// Probe the backend once, surfacing the raw provider error.
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.backend.test_connection().await
    }
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_length).collect::<String>())
    }
}

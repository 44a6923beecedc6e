/*!
 * Mock backend implementations for testing.
 *
 * This module provides mock backends that simulate different behaviors:
 * - `MockBackend::working()` - Always succeeds with marked-up text
 * - `MockBackend::rate_limited()` - Always signals a rate limit
 * - `MockBackend::failing()` - Always fails with a generic error
 * - `MockBackend::flaky(n)` - Fails the first `n` calls, then succeeds
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a deterministic translation
    Working,
    /// Always fails with a rate-limit signal
    RateLimited,
    /// Always fails with a generic request error
    Failing,
    /// Fails the first `failures` calls, then succeeds
    Flaky {
        /// Number of leading calls that fail
        failures: usize,
    },
}

/// Mock translation backend for testing engine and client behavior
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate calls made
    call_count: Arc<AtomicUsize>,
    /// Texts received by translate calls, in order
    received: Arc<Mutex<Vec<String>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str) -> String>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a working mock backend that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock backend that always signals a rate limit
    pub fn rate_limited() -> Self {
        Self::new(MockBehavior::RateLimited)
    }

    /// Create a failing mock backend that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that fails the first `failures` calls, then succeeds
    pub fn flaky(failures: usize) -> Self {
        Self::new(MockBehavior::Flaky { failures })
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Texts received by translate calls, in order
    pub fn received_texts(&self) -> Vec<String> {
        self.received.lock().clone()
    }

    fn respond(&self, text: &str) -> String {
        match self.custom_response {
            Some(generator) => generator(text),
            None => format!("{} (translated)", text),
        }
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String, ProviderError> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst);
        self.received.lock().push(text.to_string());

        match self.behavior {
            MockBehavior::Working => Ok(self.respond(text)),
            MockBehavior::RateLimited => Err(ProviderError::RateLimitExceeded(
                "429 Too Many Requests".to_string(),
            )),
            MockBehavior::Failing => {
                Err(ProviderError::RequestFailed("mock backend failure".to_string()))
            }
            MockBehavior::Flaky { failures } => {
                if call < failures {
                    Err(ProviderError::RequestFailed(format!(
                        "mock flaky failure {}",
                        call + 1
                    )))
                } else {
                    Ok(self.respond(text))
                }
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Working | MockBehavior::Flaky { .. } => Ok(()),
            MockBehavior::RateLimited => Err(ProviderError::RateLimitExceeded(
                "429 Too Many Requests".to_string(),
            )),
            MockBehavior::Failing => {
                Err(ProviderError::RequestFailed("mock backend failure".to_string()))
            }
        }
    }
}

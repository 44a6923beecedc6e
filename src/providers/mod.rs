/*!
 * Backend implementations for live translation services.
 *
 * This module contains client implementations for translation backends:
 * - Bing: Microsoft Translator v3 API
 * - Mock: scriptable backend for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all live translation backends
///
/// The language pair is fixed per run; adapters and the engine never see
/// per-call language parameters beyond what the configuration supplies.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate a single text between the given language pair
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source_language` - ISO code of the source language
    /// * `target_language` - ISO code of the target language
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;

    /// Test the connection to the backend
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the backend is reachable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod bing;
pub mod mock;

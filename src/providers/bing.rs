use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// Default public endpoint of the Microsoft Translator v3 API
const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";

/// Bing client for the Microsoft Translator text API
#[derive(Debug)]
pub struct BingTranslator {
    /// HTTP client for API requests
    client: Client,
    /// Subscription key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Azure resource region, sent as Ocp-Apim-Subscription-Region when set
    region: Option<String>,
}

/// One element of the request body array
#[derive(Debug, Serialize)]
struct TranslateRequestItem<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

/// One element of the response array
#[derive(Debug, Deserialize)]
struct TranslateResponseItem {
    /// Translations for the corresponding request item
    translations: Vec<Translation>,
}

/// A single translation in a response item
#[derive(Debug, Deserialize)]
struct Translation {
    /// The translated text
    text: String,
    /// Target language code
    #[serde(rename = "to")]
    #[allow(dead_code)]
    to_language: String,
}

impl BingTranslator {
    /// Create a new client against the public endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT, None)
    }

    /// Create a new client with a custom endpoint and optional region
    pub fn with_endpoint(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        region: Option<String>,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            region,
        }
    }

    fn translate_url(&self, source_language: &str, target_language: &str) -> String {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!(
            "{}/translate?api-version=3.0&from={}&to={}",
            base, source_language, target_language
        )
    }
}

#[async_trait]
impl TranslationBackend for BingTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let url = self.translate_url(source_language, target_language);
        let body = [TranslateRequestItem { text }];

        let mut request = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&body);
        if let Some(region) = &self.region {
            request = request.header("Ocp-Apim-Subscription-Region", region);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translator API error ({}): {}", status, message);
            return Err(match status.as_u16() {
                429 => ProviderError::RateLimitExceeded(message),
                401 | 403 => ProviderError::AuthenticationError(message),
                code => ProviderError::ApiError { status_code: code, message },
            });
        }

        let items = response
            .json::<Vec<TranslateResponseItem>>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        items
            .first()
            .and_then(|item| item.translations.first())
            .map(|translation| translation.text.clone())
            .ok_or_else(|| {
                ProviderError::ParseError("Translator API returned no translations".to_string())
            })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // Cheapest authenticated round trip the service offers.
        self.translate("test", "nl", "en").await.map(|_| ())
    }
}

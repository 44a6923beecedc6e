/*!
 * Core translation engine.
 *
 * The engine composes the skip classifier, normalizer, cache store, glossary,
 * and live client into a single `translate` operation with fixed precedence:
 * skip -> normalize -> cache -> glossary -> live call. It owns the cache
 * store for the lifetime of the run; document adapters only ever see the
 * `translate` boundary.
 */

use log::{debug, info};

use super::cache::CacheStore;
use super::glossary::Glossary;
use super::normalize::Normalizer;
use super::retry::TranslationClient;
use super::skip::SkipClassifier;

/// Orchestrates skip classification, normalization, layered lookup, and
/// cache persistence for one fixed language pair.
pub struct TranslationEngine {
    client: TranslationClient,
    cache: CacheStore,
    glossary: Glossary,
    normalizer: Normalizer,
    skip: SkipClassifier,
    source_language: String,
    target_language: String,
}

impl TranslationEngine {
    /// Create an engine around a client and a cache store. The store is
    /// passed in, not constructed here, so tests can point it anywhere.
    pub fn new(
        client: TranslationClient,
        cache: CacheStore,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            client,
            cache,
            glossary: Glossary::new(),
            normalizer: Normalizer::new(),
            skip: SkipClassifier::new(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }

    /// Resolve one fragment. Returns either the input unchanged (skip or
    /// failed live call) or the translated replacement. Never fails.
    pub async fn translate(&self, text: &str) -> String {
        if let Some(rule) = self.skip.matching_rule(text) {
            debug!("Skipping ({}): '{}'", rule, truncate_text(text, 60));
            return text.to_string();
        }

        let normalized = self.normalizer.normalize(text);
        let cache_key = Self::cache_key(&normalized);

        if let Some(cached) = self.cache.get(&cache_key) {
            debug!("Cache hit for '{}'", truncate_text(&cache_key, 60));
            return cached;
        }

        // Glossary is keyed on the literal text as it appears in documents,
        // so the pre-normalization form is what must be looked up.
        if let Some(approved) = self.glossary.lookup(text) {
            debug!("Glossary hit for '{}'", truncate_text(text, 60));
            return self.normalizer.normalize(approved);
        }

        info!("Translating: '{}'", truncate_text(&normalized, 100));
        // A failed live call keeps the original text and leaves no cache
        // entry, so a later occurrence in the same run retries the backend.
        let Some(translated) = self
            .client
            .try_translate(&normalized, &self.source_language, &self.target_language)
            .await
        else {
            return text.to_string();
        };
        let translated = self.normalizer.normalize(&translated);
        info!("Translated to: '{}'", truncate_text(&translated, 100));

        self.cache.put(&cache_key, &translated);
        translated
    }

    /// Re-validate every existing cache entry against the current skip and
    /// glossary rules, replacing stale translations produced under older
    /// rules. Pass-through entries (source equals translation) survive even
    /// when their source is now skip-classified.
    pub async fn rebuild_cache(&self) {
        let previous = self.cache.snapshot();
        self.cache.clear();
        info!("Rebuilding translation cache ({} entries)", previous.len());

        for (source, translation) in previous {
            if self.skip.should_skip(&source) {
                if source == translation {
                    self.cache.put(&source, &translation);
                }
                continue;
            }

            let resolved = self.translate(&source).await;
            if resolved != source {
                let key = Self::cache_key(&self.normalizer.normalize(&source));
                self.cache.put(&key, &resolved);
            }
        }

        self.cache.save();
        info!("Cache rebuilt: {} entries", self.cache.len());
    }

    /// The cache store owned by this engine.
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// The skip classifier used by this engine.
    pub fn skip_classifier(&self) -> &SkipClassifier {
        &self.skip
    }

    /// The normalizer used by this engine.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Cache key of a normalized fragment: trimmed and lower-cased, so that
    /// fragments which normalize identically share one entry.
    fn cache_key(normalized: &str) -> String {
        normalized.trim().to_lowercase()
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

/*!
 * Translation decision-and-caching engine.
 *
 * This module contains the core logic deciding, for an arbitrary text
 * fragment, whether it needs translation at all, normalizing it, resolving
 * it through a layered lookup, and persisting the result. It is split into
 * several submodules:
 *
 * - `engine`: orchestrator composing the parts below
 * - `cache`: persistent cache store with checkpointing
 * - `glossary`: static curated translation table
 * - `normalize`: ordered text normalization transforms
 * - `skip`: heuristic skip classification rules
 * - `retry`: retry/backoff policy and the live translation client
 */

// Re-export main types for easier usage
pub use self::cache::CacheStore;
pub use self::engine::TranslationEngine;
pub use self::glossary::Glossary;
pub use self::normalize::Normalizer;
pub use self::retry::{RecordingSleeper, RetryPolicy, Sleeper, TokioSleeper, TranslationClient};
pub use self::skip::SkipClassifier;

// Submodules
pub mod cache;
pub mod engine;
pub mod glossary;
pub mod normalize;
pub mod retry;
pub mod skip;

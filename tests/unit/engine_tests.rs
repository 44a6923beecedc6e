/*!
 * Tests for the translation engine's resolution precedence
 */

#![allow(non_snake_case)]

use std::sync::Arc;

use doctrans::providers::mock::MockBackend;

use crate::common::{create_temp_dir, engine_with_backend};

fn english_example(_text: &str) -> String {
    "This is an example sentence about legal forms.".to_string()
}

#[tokio::test]
async fn test_engine_withSkippedFragment_shouldPassThroughWithoutSideEffects() {
    let temp_dir = create_temp_dir().unwrap();
    let backend = Arc::new(MockBackend::working());
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    assert_eq!(engine.translate("2024-01-15").await, "2024-01-15");
    assert_eq!(engine.translate("{5EC53B4E-A8F1-4c0d-9E0B-7C3A1D2F4B6A}").await,
        "{5EC53B4E-A8F1-4c0d-9E0B-7C3A1D2F4B6A}");
    assert_eq!(engine.translate("").await, "");

    assert_eq!(backend.call_count(), 0);
    assert!(engine.cache().is_empty());
}

#[tokio::test]
async fn test_engine_withGlossaryTerm_shouldNotCallBackendOrCache() {
    let temp_dir = create_temp_dir().unwrap();
    let backend = Arc::new(MockBackend::working());
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    let result = engine.translate("Inhoud van het handelsregister").await;

    assert_eq!(result, "Contents of the Trade Register");
    assert_eq!(backend.call_count(), 0);
    // Glossary hits are static and never written to the cache.
    assert!(engine.cache().is_empty());
}

#[tokio::test]
async fn test_engine_withNewFragment_shouldTranslateOnceThenHitCache() {
    let temp_dir = create_temp_dir().unwrap();
    let backend = Arc::new(MockBackend::working().with_custom_response(english_example));
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    let first = engine.translate("Dit is een voorbeeldzin over rechtsvormen.").await;
    assert_eq!(first, "This is an example sentence about legal forms.");
    assert_eq!(backend.call_count(), 1);
    assert_eq!(
        engine.cache().get("dit is een voorbeeldzin over rechtsvormen."),
        Some("This is an example sentence about legal forms.".to_string())
    );

    let second = engine.translate("Dit is een voorbeeldzin over rechtsvormen.").await;
    assert_eq!(second, first);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_engine_translatingItsOwnOutput_shouldBeStable() {
    let temp_dir = create_temp_dir().unwrap();
    let backend = Arc::new(MockBackend::working().with_custom_response(english_example));
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    let translated = engine.translate("Dit is een voorbeeldzin over rechtsvormen.").await;
    let retranslated = engine.translate(&translated).await;

    assert_eq!(retranslated, translated);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_engine_withFailingBackend_shouldKeepOriginalWithoutCaching() {
    let temp_dir = create_temp_dir().unwrap();
    let backend = Arc::new(MockBackend::failing());
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    let result = engine.translate("Dit is een voorbeeldzin over rechtsvormen.").await;

    assert_eq!(result, "Dit is een voorbeeldzin over rechtsvormen.");
    assert_eq!(backend.call_count(), 3);
    // An untranslated fallback is not a translation and must not be cached.
    assert!(engine.cache().is_empty());

    // A later occurrence in the same run retries the backend instead of
    // being served the untranslated text from the cache.
    let again = engine.translate("Dit is een voorbeeldzin over rechtsvormen.").await;
    assert_eq!(again, "Dit is een voorbeeldzin over rechtsvormen.");
    assert_eq!(backend.call_count(), 6);
    assert!(engine.cache().is_empty());
}

#[tokio::test]
async fn test_engine_withEquivalentInputs_shouldShareOneTranslation() {
    let temp_dir = create_temp_dir().unwrap();
    let backend = Arc::new(MockBackend::working().with_custom_response(english_example));
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    // Inputs that normalize identically resolve to the same entry, so only
    // the first costs a live call.
    let first = engine.translate("  Dit   is een voorbeeldzin over rechtsvormen.").await;
    let second = engine.translate("Dit is een voorbeeldzin over rechtsvormen.").await;

    assert_eq!(first, second);
    assert_eq!(backend.call_count(), 1);
    assert_eq!(engine.cache().len(), 1);
}

#[tokio::test]
async fn test_engine_rebuildCache_shouldRevalidateEntriesAgainstCurrentRules() {
    let temp_dir = create_temp_dir().unwrap();
    let backend = Arc::new(MockBackend::working());
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    // Pass-through entry for a skip-classified source survives.
    engine.cache().put("abc123", "abc123");
    // Stale translation of a now skip-classified source is dropped.
    engine.cache().put("2024-01-15", "rommel");
    // Stale translation of a glossary term is replaced from the table.
    engine.cache().put("inhoud van het handelsregister", "Oude vertaling");

    engine.rebuild_cache().await;

    assert_eq!(engine.cache().len(), 2);
    assert_eq!(engine.cache().get("abc123"), Some("abc123".to_string()));
    assert_eq!(engine.cache().get("2024-01-15"), None);
    assert_eq!(
        engine.cache().get("inhoud van het handelsregister"),
        Some("Contents of the Trade Register".to_string())
    );
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_engine_accessors_shouldExposeComposedParts() {
    let temp_dir = create_temp_dir().unwrap();
    let backend = Arc::new(MockBackend::working());
    let engine = engine_with_backend(backend, &temp_dir.path().join("cache.json"));

    assert_eq!(engine.skip_classifier().rule_count(), 9);
    assert_eq!(engine.normalizer().transform_names().len(), 6);
    assert!(engine.cache().path().ends_with("cache.json"));
}

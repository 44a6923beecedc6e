/*!
 * Tests for configuration loading and validation
 */

#![allow(non_snake_case)]

use std::str::FromStr;

use doctrans::app_config::{Config, TranslationBackendKind};

use crate::common::create_temp_dir;

#[test]
fn test_config_default_shouldMatchDocumentedDefaults() {
    let config = Config::default();
    assert_eq!(config.source_language, "nl");
    assert_eq!(config.target_language, "en");
    assert_eq!(config.cache_file, "translation_cache.json");
    assert_eq!(config.backend.kind, TranslationBackendKind::Bing);
    assert_eq!(config.retry.max_retries, 3);
    assert_eq!(config.retry.initial_delay_secs, 10);
    assert_eq!(config.retry.backoff_multiplier, 2);
    assert_eq!(config.retry.pacing_delay_secs, 2);
    assert_eq!(config.documents.data_dir, "js/data");
    assert_eq!(config.documents.markup_dir, "EARoot");
    assert_eq!(config.documents.menu_files, vec!["root.xml".to_string()]);
    assert_eq!(config.documents.exclude_dirs, vec!["guidmaps".to_string()]);
}

#[test]
fn test_config_validate_withApiKey_shouldPass() {
    let mut config = Config::default();
    config.backend.api_key = "test-key".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validate_withoutApiKey_shouldFail() {
    let config = Config::default();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withSameLanguages_shouldFail() {
    let mut config = Config::default();
    config.backend.api_key = "test-key".to_string();
    config.target_language = "nl".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withEmptyLanguage_shouldFail() {
    let mut config = Config::default();
    config.backend.api_key = "test-key".to_string();
    config.source_language = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withZeroRetries_shouldFail() {
    let mut config = Config::default();
    config.backend.api_key = "test-key".to_string();
    config.retry.max_retries = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_saveAndLoad_shouldRoundTrip() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.backend.api_key = "test-key".to_string();
    config.retry.max_retries = 5;
    config.save_to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.backend.api_key, "test-key");
    assert_eq!(loaded.retry.max_retries, 5);
    assert_eq!(loaded.source_language, "nl");
}

#[test]
fn test_config_fromFile_withPartialJson_shouldFillDefaults() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, r#"{"target_language": "fr"}"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.target_language, "fr");
    assert_eq!(config.source_language, "nl");
    assert_eq!(config.retry.max_retries, 3);
}

#[test]
fn test_config_fromFile_withMissingFile_shouldFail() {
    assert!(Config::from_file("/nonexistent/conf.json").is_err());
}

#[test]
fn test_backendKind_parseAndDisplay_shouldRoundTrip() {
    let kind = TranslationBackendKind::from_str("bing").unwrap();
    assert_eq!(kind, TranslationBackendKind::Bing);
    assert_eq!(kind.to_string(), "bing");
    assert_eq!(kind.display_name(), "Bing");
    assert!(TranslationBackendKind::from_str("google").is_err());
}

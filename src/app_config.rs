use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Path of the persistent translation cache file
    #[serde(default = "default_cache_file")]
    pub cache_file: String,

    /// Translation backend config
    #[serde(default)]
    pub backend: BackendConfig,

    /// Retry and pacing config for the live client
    #[serde(default)]
    pub retry: RetryConfig,

    /// Document discovery config
    #[serde(default)]
    pub documents: DocumentsConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation backend type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationBackendKind {
    // @backend: Microsoft Translator (Bing)
    #[default]
    Bing,
}

impl TranslationBackendKind {
    // @returns: Capitalized backend name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Bing => "Bing",
        }
    }

    // @returns: Lowercase backend identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Bing => "bing".to_string(),
        }
    }
}

// Implement Display trait for TranslationBackendKind
impl std::fmt::Display for TranslationBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationBackendKind
impl std::str::FromStr for TranslationBackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bing" => Ok(Self::Bing),
            _ => Err(anyhow!("Invalid backend type: {}", s)),
        }
    }
}

/// Backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    // @field: Backend type identifier
    #[serde(rename = "type", default)]
    pub kind: TranslationBackendKind,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL; empty means the backend's public endpoint
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Azure resource region, when required by the subscription
    #[serde(default)]
    pub region: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: TranslationBackendKind::default(),
            api_key: String::new(),
            endpoint: String::new(),
            region: None,
        }
    }
}

/// Retry and pacing configuration for the live translation client
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts against the backend
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay in seconds before the first retry; doubled after each
    /// rate-limit signal
    #[serde(default = "default_initial_delay_secs")]
    pub initial_delay_secs: u64,

    /// Factor applied to the delay after each rate-limit signal
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: u32,

    /// Fixed delay in seconds after each successful live call
    #[serde(default = "default_pacing_delay_secs")]
    pub pacing_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_secs: default_initial_delay_secs(),
            backoff_multiplier: default_backoff_multiplier(),
            pacing_delay_secs: default_pacing_delay_secs(),
        }
    }
}

/// Document discovery configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentsConfig {
    /// Directory containing array-literal data files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Directory containing generated markup pages
    #[serde(default = "default_markup_dir")]
    pub markup_dir: String,

    /// Menu files inside the data directory, processed after the data files
    #[serde(default = "default_menu_files")]
    pub menu_files: Vec<String>,

    /// Directory names excluded from data file discovery
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            markup_dir: default_markup_dir(),
            menu_files: default_menu_files(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "nl".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_cache_file() -> String {
    "translation_cache.json".to_string()
}

fn default_max_retries() -> u32 {
    3 // Default to 3 attempts
}

fn default_initial_delay_secs() -> u64 {
    10 // 10 second starting delay, doubled on each rate-limit retry
}

fn default_backoff_multiplier() -> u32 {
    2
}

fn default_pacing_delay_secs() -> u64 {
    2 // Fixed wait between successful live calls
}

fn default_data_dir() -> String {
    "js/data".to_string()
}

fn default_markup_dir() -> String {
    "EARoot".to_string()
}

fn default_menu_files() -> Vec<String> {
    vec!["root.xml".to_string()]
}

fn default_exclude_dirs() -> Vec<String> {
    vec!["guidmaps".to_string()]
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to open config file: {:?}", path.as_ref()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(&path, serialized)
            .with_context(|| format!("Failed to write config to file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            return Err(anyhow!("Source language must not be empty"));
        }
        if self.target_language.trim().is_empty() {
            return Err(anyhow!("Target language must not be empty"));
        }
        if self.source_language == self.target_language {
            return Err(anyhow!(
                "Source and target language must differ, both are '{}'",
                self.source_language
            ));
        }
        if self.cache_file.trim().is_empty() {
            return Err(anyhow!("Cache file path must not be empty"));
        }

        // The only supported backend requires a subscription key
        match self.backend.kind {
            TranslationBackendKind::Bing => {
                if self.backend.api_key.is_empty() {
                    return Err(anyhow!("Translation API key is required for Bing backend"));
                }
            }
        }

        if self.retry.max_retries == 0 {
            return Err(anyhow!("max_retries must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            cache_file: default_cache_file(),
            backend: BackendConfig::default(),
            retry: RetryConfig::default(),
            documents: DocumentsConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::{Config, TranslationBackendKind};
use crate::documents::{ArrayDataAdapter, MarkupAdapter};
use crate::file_utils::FileManager;
use crate::providers::bing::BingTranslator;
use crate::providers::TranslationBackend;
use crate::translation::{CacheStore, RetryPolicy, TranslationClient, TranslationEngine};

// @module: Application controller for document translation runs

/// Document adapter selector for batch processing
#[derive(Debug, Clone, Copy)]
enum AdapterKind {
    /// Array-literal data and menu files
    ArrayData,
    /// Generated markup pages
    Markup,
}

impl AdapterKind {
    fn family(self) -> &'static str {
        match self {
            Self::ArrayData => "data",
            Self::Markup => "markup",
        }
    }
}

/// Main application controller for a full translation run
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Run the full convergence pass over a site root: rebuild the cache,
    /// then stream every document family through the engine, saving the
    /// cache at checkpoints and at the end.
    pub async fn run(&self, site_root: PathBuf) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(&site_root) {
            return Err(anyhow::anyhow!("Site root does not exist: {:?}", site_root));
        }

        let engine = self.build_engine(&site_root)?;
        engine.cache().load();

        // Reconcile existing cache content with the current rules before
        // touching any document.
        engine.rebuild_cache().await;

        let mut total_changed = 0;
        total_changed += self.translate_data_files(&engine, &site_root).await?;
        total_changed += self.translate_menu_files(&engine, &site_root).await?;
        total_changed += self.translate_markup_files(&engine, &site_root).await?;

        engine.cache().save();

        info!(
            "Run finished in {}: {} fragments replaced, {} cache entries",
            Self::format_duration(start_time.elapsed()),
            total_changed,
            engine.cache().len()
        );
        Ok(())
    }

    /// Build the translation engine from the configuration.
    fn build_engine(&self, site_root: &Path) -> Result<TranslationEngine> {
        let backend: Arc<dyn TranslationBackend> = match self.config.backend.kind {
            TranslationBackendKind::Bing => Arc::new(BingTranslator::with_endpoint(
                self.config.backend.api_key.clone(),
                self.config.backend.endpoint.clone(),
                self.config.backend.region.clone(),
            )),
        };

        let policy = RetryPolicy {
            max_attempts: self.config.retry.max_retries,
            initial_delay: Duration::from_secs(self.config.retry.initial_delay_secs),
            backoff_multiplier: self.config.retry.backoff_multiplier,
            pacing_delay: Duration::from_secs(self.config.retry.pacing_delay_secs),
        };
        let client = TranslationClient::new(backend, policy);

        let cache = CacheStore::new(site_root.join(&self.config.cache_file));

        Ok(TranslationEngine::new(
            client,
            cache,
            self.config.source_language.clone(),
            self.config.target_language.clone(),
        ))
    }

    /// Translate all array-literal data files under the data directory.
    async fn translate_data_files(
        &self,
        engine: &TranslationEngine,
        site_root: &Path,
    ) -> Result<usize> {
        let data_dir = site_root.join(&self.config.documents.data_dir);
        if !FileManager::dir_exists(&data_dir) {
            warn!("Data directory not found, skipping: {:?}", data_dir);
            return Ok(0);
        }

        let files: Vec<PathBuf> =
            FileManager::find_files(&data_dir, "xml", &self.config.documents.exclude_dirs)
                .context("Failed to discover data files")?
                .into_iter()
                .filter(|path| !self.is_menu_file(path))
                .collect();

        info!("Translating {} data files...", files.len());
        self.process_files(engine, &files, AdapterKind::ArrayData).await
    }

    /// Translate the configured menu files.
    async fn translate_menu_files(
        &self,
        engine: &TranslationEngine,
        site_root: &Path,
    ) -> Result<usize> {
        let data_dir = site_root.join(&self.config.documents.data_dir);
        let files: Vec<PathBuf> = self
            .config
            .documents
            .menu_files
            .iter()
            .map(|name| data_dir.join(name))
            .filter(|path| {
                let exists = FileManager::file_exists(path);
                if !exists {
                    warn!("Menu file not found, skipping: {:?}", path);
                }
                exists
            })
            .collect();

        info!("Translating menu structure ({} files)...", files.len());
        self.process_files(engine, &files, AdapterKind::ArrayData).await
    }

    /// Translate all markup pages under the markup directory.
    async fn translate_markup_files(
        &self,
        engine: &TranslationEngine,
        site_root: &Path,
    ) -> Result<usize> {
        let markup_dir = site_root.join(&self.config.documents.markup_dir);
        if !FileManager::dir_exists(&markup_dir) {
            warn!("Markup directory not found, skipping: {:?}", markup_dir);
            return Ok(0);
        }

        let files = FileManager::find_files(&markup_dir, "htm", &[])
            .context("Failed to discover markup files")?;

        info!("Translating {} markup files...", files.len());
        self.process_files(engine, &files, AdapterKind::Markup).await
    }

    /// Run one adapter over a batch of files with a progress bar. A failing
    /// file is logged and skipped; the batch always runs to completion.
    async fn process_files(
        &self,
        engine: &TranslationEngine,
        files: &[PathBuf],
        adapter: AdapterKind,
    ) -> Result<usize> {
        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut changed = 0;
        for path in files {
            progress.set_message(format!(
                "{}",
                path.file_name().unwrap_or_default().to_string_lossy()
            ));
            let result = match adapter {
                AdapterKind::ArrayData => ArrayDataAdapter::translate_file(engine, path).await,
                AdapterKind::Markup => MarkupAdapter::translate_file(engine, path).await,
            };
            match result {
                Ok(count) => changed += count,
                Err(e) => error!("Error processing {} file {:?}: {}", adapter.family(), path, e),
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(changed)
    }

    fn is_menu_file(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| {
                self.config
                    .documents
                    .menu_files
                    .iter()
                    .any(|menu| menu.as_str() == name.to_string_lossy())
            })
            .unwrap_or(false)
    }

    /// Format a duration as human-readable minutes and seconds.
    fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs >= 60 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{}s", secs)
        }
    }
}

/*!
 * Adapter for array-literal data files.
 *
 * The site generator emits JavaScript files where each item is a line of
 * the form `new Array(id, icon, "Title", ...)`. The third comma-separated
 * element is the human-readable title; everything else is structure and
 * must be preserved byte for byte. Menu files (`root.xml` and friends) use
 * the same format and go through this adapter too.
 *
 * Splitting on commas is intentionally naive, matching the file format:
 * titles containing commas fail the quoted-element check and are left
 * untouched rather than corrupted.
 */

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::file_utils::FileManager;
use crate::translation::TranslationEngine;

/// Index of the title element inside a `new Array(...)` line.
const TITLE_ELEMENT_INDEX: usize = 2;

/// Line-oriented adapter for `new Array(...)` data and menu files.
pub struct ArrayDataAdapter;

impl ArrayDataAdapter {
    /// Translate all candidate fragments in one file, rewriting it in place
    /// when anything changed. Returns the number of replaced fragments.
    pub async fn translate_file(engine: &TranslationEngine, path: &Path) -> Result<usize> {
        let content = FileManager::read_to_string(path)?;

        let mut changed = 0;
        let mut new_lines = Vec::new();
        for line in content.lines() {
            match Self::rewrite_line(engine, line).await {
                Some(rewritten) => {
                    changed += 1;
                    new_lines.push(rewritten);
                }
                None => new_lines.push(line.to_string()),
            }
        }

        if changed > 0 {
            FileManager::write_to_file(path, &new_lines.join("\n"))
                .with_context(|| format!("Failed to rewrite data file {:?}", path))?;
            debug!("Rewrote {:?} ({} fragments)", path, changed);
        }

        Ok(changed)
    }

    /// Rewrite a single line, returning `None` when it is not a candidate
    /// or its title did not change.
    async fn rewrite_line(engine: &TranslationEngine, line: &str) -> Option<String> {
        if !line.contains("new Array(") {
            return None;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() <= TITLE_ELEMENT_INDEX {
            warn!("Array line with too few elements, leaving as is: '{}'", line.trim());
            return None;
        }

        let title_part = parts[TITLE_ELEMENT_INDEX];
        let text = unquote(title_part)?;

        let translated = engine.translate(text).await;
        if translated == text {
            return None;
        }

        let mut new_parts: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
        new_parts[TITLE_ELEMENT_INDEX] = requote(title_part, &translated);
        Some(new_parts.join(","))
    }
}

/// Extract the inner text of a double-quoted element, if it is one.
fn unquote(part: &str) -> Option<&str> {
    let trimmed = part.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        Some(&trimmed[1..trimmed.len() - 1])
    } else {
        None
    }
}

/// Re-quote a replacement title, preserving the element's surrounding
/// whitespace.
fn requote(original_part: &str, replacement: &str) -> String {
    let trimmed = original_part.trim_start();
    let leading = &original_part[..original_part.len() - trimmed.len()];
    let trimmed = trimmed.trim_end();
    let trailing_len = original_part.len() - leading.len() - trimmed.len();
    let trailing = &original_part[original_part.len() - trailing_len..];
    format!("{}\"{}\"{}", leading, replacement, trailing)
}

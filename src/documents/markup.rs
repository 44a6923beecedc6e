/*!
 * Adapter for generated HTML pages.
 *
 * The pages are machine-generated with a rigid shape, so a handful of
 * anchored patterns is enough: the document title, the `ObjectTitle` div,
 * and simple text-only content elements. Elements with nested markup are
 * left alone; fragments carrying inline markup are passed to the engine as
 * opaque text.
 */

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::file_utils::FileManager;
use crate::translation::TranslationEngine;

/// Content elements whose simple text is a translation candidate.
const TEXT_ELEMENT_TAGS: &[&str] = &["h1", "h2", "h3", "p", "div", "span", "td", "th"];

static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<title>([^<]*)</title>").unwrap());
static OBJECT_TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<div class="ObjectTitle">([^<]*)</div>"#).unwrap());
static TEXT_ELEMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    TEXT_ELEMENT_TAGS
        .iter()
        .map(|tag| {
            // The regex crate has no backreferences, so each tag gets its
            // own open/close pattern.
            Regex::new(&format!(r"<{tag}((?:\s[^>]*)?)>([^<]+)</{tag}>")).unwrap()
        })
        .collect()
});

/// A candidate fragment located inside the page: byte range of the text
/// node and its current content.
struct Candidate {
    start: usize,
    end: usize,
    text: String,
}

/// Pattern-based adapter for generated HTML pages.
pub struct MarkupAdapter;

impl MarkupAdapter {
    /// Translate all candidate fragments in one page, rewriting it in place
    /// when anything changed. Returns the number of replaced fragments.
    pub async fn translate_file(engine: &TranslationEngine, path: &Path) -> Result<usize> {
        let mut content = FileManager::read_to_string(path)?;
        let mut changed = 0;

        changed += Self::rewrite_object_titles(engine, &mut content).await;
        changed += Self::rewrite_simple_text(engine, &mut content, &TITLE_PATTERN, 1).await;
        for pattern in TEXT_ELEMENT_PATTERNS.iter() {
            changed += Self::rewrite_simple_text(engine, &mut content, pattern, 2).await;
        }

        if changed > 0 {
            FileManager::write_to_file(path, &content)
                .with_context(|| format!("Failed to rewrite markup file {:?}", path))?;
            debug!("Rewrote {:?} ({} fragments)", path, changed);
        }

        Ok(changed)
    }

    /// Translate the text node matched by `group` in every occurrence of
    /// `pattern`, splicing replacements back in place.
    async fn rewrite_simple_text(
        engine: &TranslationEngine,
        content: &mut String,
        pattern: &Regex,
        group: usize,
    ) -> usize {
        let candidates: Vec<Candidate> = pattern
            .captures_iter(content)
            .filter_map(|caps| {
                // The ObjectTitle div is handled separately with name/type
                // splitting; do not re-match it here.
                if caps.get(0).is_some_and(|m| m.as_str().contains("ObjectTitle")) {
                    return None;
                }
                caps.get(group).map(|m| Candidate {
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                })
            })
            .collect();

        let mut changed = 0;
        // Splice from the back so earlier ranges stay valid.
        for candidate in candidates.into_iter().rev() {
            let original = candidate.text.trim();
            if original.is_empty() {
                continue;
            }
            let translated = engine.translate(original).await;
            if translated != original {
                content.replace_range(candidate.start..candidate.end, &translated);
                changed += 1;
            }
        }
        changed
    }

    /// Translate `ObjectTitle` divs. A `name: type` title keeps its type
    /// suffix untranslated; only the name part goes through the engine.
    async fn rewrite_object_titles(engine: &TranslationEngine, content: &mut String) -> usize {
        let candidates: Vec<Candidate> = OBJECT_TITLE_PATTERN
            .captures_iter(content)
            .filter_map(|caps| {
                caps.get(1).map(|m| Candidate {
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                })
            })
            .collect();

        let mut changed = 0;
        for candidate in candidates.into_iter().rev() {
            let original = candidate.text.trim();
            if original.is_empty() {
                continue;
            }

            let translated = match original.split_once(": ") {
                Some((name, type_part)) => {
                    format!("{}: {}", engine.translate(name).await, type_part)
                }
                None => engine.translate(original).await,
            };

            if translated != original {
                content.replace_range(candidate.start..candidate.end, &translated);
                changed += 1;
            }
        }
        changed
    }
}

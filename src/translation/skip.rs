/*!
 * Skip classification for translation candidates.
 *
 * Live translation of identifiers, dates, and codes corrupts data and wastes
 * API quota, so every fragment is screened by a list of independent predicate
 * rules before anything else happens. The rules are plain boolean predicates
 * ORed together; mechanical rules come first so they claim the fragment in
 * debug logs before the broader language heuristic.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Accented characters that mark a word as source-language text.
const ACCENTED_CHARS: &str = "éëïöüàèìòùâêîôûä";

/// Common Dutch function words. Short everyday words carry no accents or
/// double vowels, so without this list whole sentences of plain Dutch would
/// be misread as already-translated text.
const SOURCE_FUNCTION_WORDS: &[&str] = &[
    "de", "het", "een", "en", "van", "te", "dat", "die", "dit", "deze",
    "is", "zijn", "was", "wordt", "worden", "op", "aan", "met", "voor",
    "naar", "bij", "uit", "ook", "maar", "om", "als", "dan", "nog",
    "niet", "geen", "wel", "onder", "over", "tussen", "door", "binnen",
];

static DATE_DMY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4}").unwrap());
static DATE_YMD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2,4}[-/.]\d{1,2}[-/.]\d{1,2}").unwrap());
static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^code:?\s*['"]?\d+['"]?$"#).unwrap());
static GUID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{?[0-9a-f]{8}-?([0-9a-f]{4}-?){3}[0-9a-f]{12}\}?").unwrap());
static HEX_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{?[0-9a-f-]+\}?$").unwrap());
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^['"]?\d+['"]?$"#).unwrap());

/// A single named skip predicate.
pub struct SkipRule {
    /// Short identifier used in debug logging
    pub name: &'static str,
    /// Predicate deciding whether the fragment is exempt from translation
    pub matches: fn(&str) -> bool,
}

/// Heuristic classifier deciding whether a fragment needs no translation.
pub struct SkipClassifier {
    rules: Vec<SkipRule>,
}

impl Default for SkipClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SkipClassifier {
    /// Create a classifier with the standard rule set.
    pub fn new() -> Self {
        Self {
            rules: vec![
                SkipRule { name: "empty", matches: is_blank },
                SkipRule { name: "date", matches: is_date },
                SkipRule { name: "code", matches: is_code },
                SkipRule { name: "guid", matches: is_guid },
                SkipRule { name: "hex-token", matches: is_hex_token },
                SkipRule { name: "line-break-marker", matches: is_line_break_marker },
                SkipRule { name: "short-token", matches: is_short_uniform_token },
                SkipRule { name: "numeric", matches: is_numeric },
                SkipRule { name: "looks-target-language", matches: looks_target_language },
            ],
        }
    }

    /// Return true when the fragment should pass through untranslated.
    pub fn should_skip(&self, text: &str) -> bool {
        self.matching_rule(text).is_some()
    }

    /// Name of the first rule claiming the fragment, if any.
    pub fn matching_rule(&self, text: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| (rule.matches)(text))
            .map(|rule| rule.name)
    }

    /// Number of rules in the classifier.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Whether a single word carries any signal of the source language:
/// accented characters, Dutch double vowels, the `ij` digraph, or membership
/// in the function-word list.
fn is_source_language_word(word: &str) -> bool {
    if word.chars().any(|c| ACCENTED_CHARS.contains(c)) {
        return true;
    }
    let stripped: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if stripped.is_empty() {
        return false;
    }
    if SOURCE_FUNCTION_WORDS.contains(&stripped.as_str()) {
        return true;
    }
    ["aa", "ee", "oo", "uu", "ij"]
        .iter()
        .any(|pattern| stripped.contains(pattern))
}

/// More than half of the words show no source-language signal, so the text
/// is most likely already in the target language.
fn looks_target_language(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }
    let target_words = words
        .iter()
        .filter(|word| !is_source_language_word(word))
        .count();
    target_words * 2 > words.len()
}

fn is_date(text: &str) -> bool {
    DATE_DMY.is_match(text) || DATE_YMD.is_match(text)
}

fn is_code(text: &str) -> bool {
    CODE_PATTERN.is_match(text.to_lowercase().trim())
}

fn is_guid(text: &str) -> bool {
    GUID_PATTERN.is_match(&text.to_lowercase())
}

fn is_hex_token(text: &str) -> bool {
    HEX_TOKEN.is_match(text.to_lowercase().trim())
}

fn is_line_break_marker(text: &str) -> bool {
    text.contains("<br/>") && text.replace("<br/>", "").trim().chars().count() < 3
}

/// Short all-caps or all-lowercase tokens are codes, not language.
fn is_short_uniform_token(text: &str) -> bool {
    let mut words = text.split_whitespace();
    let (Some(word), None) = (words.next(), words.next()) else {
        return false;
    };
    if word.chars().count() > 4 {
        return false;
    }
    let alphabetic: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    if alphabetic.is_empty() {
        return false;
    }
    alphabetic.iter().all(|c| c.is_uppercase()) || alphabetic.iter().all(|c| c.is_lowercase())
}

fn is_numeric(text: &str) -> bool {
    NUMERIC.is_match(text.trim())
}

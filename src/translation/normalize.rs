/*!
 * Text normalization for translation fragments.
 *
 * Normalization runs before cache lookup and after every live translation,
 * so it must be idempotent: `normalize(normalize(x)) == normalize(x)`.
 * The steps are modeled as an ordered list of named transforms; order is
 * significant (whitespace collapse must precede sentence splitting, phrase
 * repairs must precede the final trim).
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal translation-artifact repairs applied after the structural steps.
const PHRASE_REPAIRS: &[(&str, &str)] = &[
    ("sacrifices this data", "provides this data"),
    ("leg implemented", "been implemented"),
];

static MULTI_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.,;:!?])").unwrap());
static MISSING_SPACE_AFTER_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.,;:!?])(\S)").unwrap());
static SPACE_BEFORE_CLOSE_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\)").unwrap());
static SPACE_AFTER_OPEN_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\s+").unwrap());

/// A single named normalization step.
struct Transform {
    name: &'static str,
    apply: fn(&str) -> String,
}

/// Canonicalizes whitespace, punctuation spacing, and sentence capitalization,
/// and repairs a small set of known translation artifacts.
pub struct Normalizer {
    transforms: Vec<Transform>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with the standard transform sequence.
    pub fn new() -> Self {
        Self {
            transforms: vec![
                Transform { name: "collapse-whitespace", apply: collapse_whitespace },
                Transform { name: "capitalize-sentences", apply: capitalize_sentences },
                Transform { name: "punctuation-spacing", apply: fix_punctuation_spacing },
                Transform { name: "parenthesis-spacing", apply: fix_parenthesis_spacing },
                Transform { name: "phrase-repairs", apply: apply_phrase_repairs },
                Transform { name: "trim", apply: |text| text.trim().to_string() },
            ],
        }
    }

    /// Apply all transforms in order.
    pub fn normalize(&self, text: &str) -> String {
        self.transforms
            .iter()
            .fold(text.to_string(), |acc, transform| (transform.apply)(&acc))
    }

    /// Names of the transforms, in application order.
    pub fn transform_names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name).collect()
    }
}

fn collapse_whitespace(text: &str) -> String {
    MULTI_WHITESPACE.replace_all(text, " ").into_owned()
}

/// Split on sentence terminators, trim each segment, and upper-case its
/// first letter. Terminator runs produce empty segments, which vanish; the
/// punctuation-spacing step restores the single space between sentences.
fn capitalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut segment = String::new();
    for ch in text.chars() {
        if matches!(ch, '.' | '!' | '?') {
            out.push_str(&capitalize_first(segment.trim()));
            out.push(ch);
            segment.clear();
        } else {
            segment.push(ch);
        }
    }
    out.push_str(&capitalize_first(segment.trim()));
    out
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn fix_punctuation_spacing(text: &str) -> String {
    let text = SPACE_BEFORE_PUNCT.replace_all(text, "$1");
    MISSING_SPACE_AFTER_PUNCT
        .replace_all(&text, "$1 $2")
        .into_owned()
}

fn fix_parenthesis_spacing(text: &str) -> String {
    let text = SPACE_BEFORE_CLOSE_PAREN.replace_all(text, ")");
    SPACE_AFTER_OPEN_PAREN.replace_all(&text, "(").into_owned()
}

fn apply_phrase_repairs(text: &str) -> String {
    PHRASE_REPAIRS
        .iter()
        .fold(text.to_string(), |acc, (bad, good)| acc.replace(bad, good))
}

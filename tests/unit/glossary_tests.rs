/*!
 * Tests for the curated glossary
 */

#![allow(non_snake_case)]

use doctrans::translation::Glossary;

#[test]
fn test_glossary_lookup_withKnownTerm_shouldReturnApprovedTranslation() {
    let glossary = Glossary::new();
    assert_eq!(glossary.lookup("Handelsregister"), Some("Trade Register"));
    assert_eq!(glossary.lookup("Inleiding"), Some("Introduction"));
    assert_eq!(
        glossary.lookup("Inhoud van het handelsregister"),
        Some("Contents of the Trade Register")
    );
}

#[test]
fn test_glossary_lookup_withUnknownTerm_shouldReturnNone() {
    let glossary = Glossary::new();
    assert_eq!(glossary.lookup("Niet in de tabel"), None);
    assert_eq!(glossary.lookup(""), None);
}

#[test]
fn test_glossary_lookup_shouldBeCaseSensitive() {
    let glossary = Glossary::new();
    // The table is literal; casing variants are separate entries, not folds.
    assert_eq!(glossary.lookup("HANDELSREGISTER"), None);
    assert_eq!(glossary.lookup("handelsregister"), None);
    assert_eq!(
        glossary.lookup("inhoud van het handelsregister"),
        Some("Contents of the Trade Register")
    );
}

#[test]
fn test_glossary_lookup_withPartiallyTranslatedVariant_shouldRepairIt() {
    let glossary = Glossary::new();
    // Earlier runs left these normalization artifacts in documents; the
    // table maps them to the canonical form.
    assert_eq!(glossary.lookup("Data catalog 3. 0. 4h"), Some("Data Catalog 3.0.4h"));
    assert_eq!(
        glossary.lookup("Content of the trade register"),
        Some("Contents of the Trade Register")
    );
}

#[test]
fn test_glossary_contains_shouldMatchLookup() {
    let glossary = Glossary::new();
    assert!(glossary.contains("Handelsregister"));
    assert!(!glossary.contains("Niet in de tabel"));
}

#[test]
fn test_glossary_len_shouldCoverTheCuratedDomain() {
    let glossary = Glossary::new();
    assert!(glossary.len() > 100, "glossary unexpectedly small: {}", glossary.len());
    assert!(!glossary.is_empty());
}

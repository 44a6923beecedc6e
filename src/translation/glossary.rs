/*!
 * Curated glossary of approved translations.
 *
 * The table is consulted before any live call and is authoritative over the
 * backend: reviewed terminology for the trade-register domain must not drift
 * with backend updates. Lookup is exact string match, deliberately without
 * case folding or normalization, which keeps the table auditable; the price
 * is the block of redundant casing/spacing variants near the end.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Approved source-to-target phrase pairs. Entries are literal: a caller must
/// present the text in exactly the recorded form.
const GLOSSARY_TABLE: &[(&str, &str)] = &[
    // Menu items and titles
    ("Inleiding", "Introduction"),
    ("Model", "Model"),
    ("Overzicht rechtsvormen", "Overview of Legal Forms"),
    ("HR Model Overzicht (conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("HR Model Overzicht (volledig)", "Trade Register Model Overview (complete)"),
    ("HR Model Objecttypen", "Trade Register Model Object Types"),
    ("HR Model Gegevensgroepen", "Trade Register Model Data Groups"),
    ("HR Model Domeinwaarden", "Trade Register Model Domain Values"),
    ("Referenties", "References"),
    ("Inhoud van het handelsregister", "Contents of the Trade Register"),
    ("inhoud van het handelsregister", "Contents of the Trade Register"),
    ("Content of the trade register", "Contents of the Trade Register"),
    ("Content of the Trade Register", "Contents of the Trade Register"),
    ("Identificerende gegevens", "Identifying Data"),
    ("Handelsregister", "Trade Register"),
    ("Beschrijving", "Description"),
    ("Toelichting", "Explanation"),
    ("Gegevensgroep", "Data Group"),
    ("Wetgeving", "Legislation"),
    ("Documentatie", "Documentation"),
    ("Kamer van Koophandel", "Chamber of Commerce"),
    ("Basisregistraties", "Basic Registrations"),
    ("Openbare gegevens", "Public Data"),
    ("Niet-openbare gegevens", "Non-public Data"),
    ("Advocaten", "Lawyers"),
    ("Notarissen", "Notaries"),
    ("Deurwaarders", "Bailiffs"),
    ("Beschermde adressen", "Protected Addresses"),
    ("Handelsregister Dataservice", "Trade Register Data Service"),
    ("Databankrechten", "Database Rights"),
    ("Openbaar", "Public"),
    ("Niet-openbaar", "Non-public"),
    ("Autorisatieniveaus", "Authorization Levels"),
    ("Markt", "Market"),
    ("Datacatalogus", "Data Catalog"),
    ("Datacatalogus 3.0.4h", "Data Catalog 3.0.4h"),
    ("Data catalog 3. 0. 4h", "Data Catalog 3.0.4h"),
    ("Data Catalog 3. 0. 4h", "Data Catalog 3.0.4h"),
    ("Data catalog", "Data Catalog"),
    ("Overzicht", "Overview"),
    ("Rechtsvormen", "Legal Forms"),
    ("Objecttypen", "Object Types"),
    ("Gegevensgroepen", "Data Groups"),
    ("Domeinwaarden", "Domain Values"),
    ("Buitenlandse onderneming", "Foreign Company"),
    ("Eenmanszaak", "Sole Proprietorship"),
    ("Rechtspersoon", "Legal Entity"),
    ("Samenwerkingsverband", "Partnership"),
    ("Vestiging", "Establishment"),
    ("Functionaris", "Official"),
    ("Gemachtigde", "Authorized Representative"),
    ("Aansprakelijke", "Liable Party"),
    ("Eigenaar", "Owner"),
    ("Bestuurder", "Director"),
    ("Commissaris", "Commissioner"),
    // Model overview variations. Generated pages, the menu data, and earlier
    // partially-translated runs each render this title differently, so the
    // table carries every observed spelling as its own literal entry.
    ("HR-Model Overzicht (conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("HR-Model Overzicht(conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("HR Model Overzicht(conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("HR-Model Overzicht - conceptueel", "Trade Register Model Overview - conceptual"),
    ("HR Model Overzicht - conceptueel", "Trade Register Model Overview - conceptual"),
    ("HR-Model Overzicht conceptueel", "Trade Register Model Overview (conceptual)"),
    ("HR Model Overzicht conceptueel", "Trade Register Model Overview (conceptual)"),
    ("HR-Model Overview (conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("HR Model Overview (conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("HR-Model Overview(conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("HR Model Overview(conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("HR-Model Overview - conceptueel", "Trade Register Model Overview - conceptual"),
    ("HR Model Overview - conceptueel", "Trade Register Model Overview - conceptual"),
    ("HR-Model Overview conceptueel", "Trade Register Model Overview (conceptual)"),
    ("HR Model Overview conceptueel", "Trade Register Model Overview (conceptual)"),
    ("HR Model Overview (conceptual)", "Trade Register Model Overview (conceptual)"),
    ("HR-Model Overview (conceptual)", "Trade Register Model Overview (conceptual)"),
    ("HR-Model Overzicht (volledig)", "Trade Register Model Overview (complete)"),
    ("HR Model Overview (volledig)", "Trade Register Model Overview (complete)"),
    ("HR-Model Overview (volledig)", "Trade Register Model Overview (complete)"),
    ("HR Model Overview (full)", "Trade Register Model Overview (complete)"),
    ("HR-Model Overview (full)", "Trade Register Model Overview (complete)"),
    ("Hr model overview (conceptual)", "Trade Register Model Overview (conceptual)"),
    ("hr model overview (conceptual)", "Trade Register Model Overview (conceptual)"),
    ("hr-model overview (conceptual)", "Trade Register Model Overview (conceptual)"),
    ("hr-model overview (conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("hr model overzicht (conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("hr-model overzicht (conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("hr model overview (conceptueel)", "Trade Register Model Overview (conceptual)"),
    ("hr model overzicht (conceptual)", "Trade Register Model Overview (conceptual)"),
    ("hr-model overzicht (conceptual)", "Trade Register Model Overview (conceptual)"),
    (
        "hr model overview (conceptual): class diagram",
        "Trade Register Model Overview (conceptual): class diagram",
    ),
    (
        "hr-model overview (conceptual): class diagram",
        "Trade Register Model Overview (conceptual): class diagram",
    ),
    (
        "hr model overzicht (conceptueel): class diagram",
        "Trade Register Model Overview (conceptual): class diagram",
    ),
    (
        "hr-model overzicht (conceptueel): class diagram",
        "Trade Register Model Overview (conceptual): class diagram",
    ),
    (
        "HR model overview (conceptual): class diagram",
        "Trade Register Model Overview (conceptual): class diagram",
    ),
    (
        "HR-model overview (conceptual): class diagram",
        "Trade Register Model Overview (conceptual): class diagram",
    ),
    (
        "HR model overzicht (conceptueel): class diagram",
        "Trade Register Model Overview (conceptual): class diagram",
    ),
    (
        "HR-model overzicht (conceptueel): class diagram",
        "Trade Register Model Overview (conceptual): class diagram",
    ),
    // Common words and phrases
    ("producten bestellen", "order products"),
    ("gegevenscatalogus", "data catalog"),
    ("bevoegde gebruikers", "authorized users"),
    ("niet-bevoegde gebruikers", "unauthorized users"),
    ("onder constructie", "under construction"),
    ("in bewerking", "in progress"),
    ("raadplegen", "consult"),
    ("opvragen", "request"),
    ("inzien", "view"),
    ("uittreksels", "extracts"),
    ("producten", "products"),
    ("diensten", "services"),
    // Special characters and formatting pass-throughs
    ("«", "«"),
    ("»", "»"),
    ("<br/>", "<br/>"),
];

static GLOSSARY_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| GLOSSARY_TABLE.iter().copied().collect());

/// Static curated exact-match translation table, never mutated at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Glossary;

impl Default for Glossary {
    fn default() -> Self {
        Self::new()
    }
}

impl Glossary {
    /// Create a handle to the compiled-in table.
    pub fn new() -> Self {
        Self
    }

    /// Exact-match lookup. Values are raw table text; the caller is expected
    /// to normalize the result.
    pub fn lookup(&self, text: &str) -> Option<&'static str> {
        GLOSSARY_MAP.get(text).copied()
    }

    /// Whether the exact text is a glossary key.
    pub fn contains(&self, text: &str) -> bool {
        GLOSSARY_MAP.contains_key(text)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        GLOSSARY_MAP.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        GLOSSARY_MAP.is_empty()
    }
}

/*!
 * Tests for the document adapters
 */

#![allow(non_snake_case)]

use std::fs;
use std::sync::Arc;

use doctrans::documents::{ArrayDataAdapter, MarkupAdapter};
use doctrans::providers::mock::MockBackend;

use crate::common::{create_temp_dir, create_test_file, engine_with_backend};

fn english_example(_text: &str) -> String {
    "This is an example sentence about legal forms.".to_string()
}

const DATA_FILE: &str = r#"menu = new Array();
menu[0] = new Array(1, "page.htm", "Inhoud van het handelsregister", 0);
menu[1] = new Array(2, "other.htm", 42, 0);
"#;

#[tokio::test]
async fn test_arrayData_translateFile_shouldRewriteOnlyQuotedTitles() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(temp_dir.path(), "root.xml", DATA_FILE).unwrap();
    let backend = Arc::new(MockBackend::working());
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    let changed = ArrayDataAdapter::translate_file(&engine, &path).await.unwrap();

    assert_eq!(changed, 1);
    let content = fs::read_to_string(&path).unwrap();
    assert!(content
        .contains(r#"menu[0] = new Array(1, "page.htm", "Contents of the Trade Register", 0);"#));
    // The unquoted numeric title and the constructor line are untouched.
    assert!(content.contains("menu = new Array();"));
    assert!(content.contains(r#"menu[1] = new Array(2, "other.htm", 42, 0);"#));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_arrayData_translateFile_shouldBeIdempotent() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(temp_dir.path(), "root.xml", DATA_FILE).unwrap();
    let backend = Arc::new(MockBackend::working());
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    ArrayDataAdapter::translate_file(&engine, &path).await.unwrap();
    let after_first = fs::read_to_string(&path).unwrap();

    let changed = ArrayDataAdapter::translate_file(&engine, &path).await.unwrap();
    assert_eq!(changed, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_arrayData_translateFile_withMalformedLine_shouldLeaveItUntouched() {
    let temp_dir = create_temp_dir().unwrap();
    let content = "broken = new Array(1);\n";
    let path = create_test_file(temp_dir.path(), "data.xml", content).unwrap();
    let backend = Arc::new(MockBackend::working());
    let engine = engine_with_backend(backend, &temp_dir.path().join("cache.json"));

    let changed = ArrayDataAdapter::translate_file(&engine, &path).await.unwrap();

    assert_eq!(changed, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

const MARKUP_FILE: &str = r#"<html><head><title>Inhoud van het handelsregister</title></head>
<body>
<div class="ObjectTitle">Inhoud van het handelsregister: Class</div>
<p>Dit is een voorbeeldzin over rechtsvormen.</p>
<p>Already translated English text here.</p>
<td><img src="x.png"/></td>
</body></html>
"#;

#[tokio::test]
async fn test_markup_translateFile_shouldRewriteTitleObjectTitleAndText() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(temp_dir.path(), "page.htm", MARKUP_FILE).unwrap();
    let backend = Arc::new(MockBackend::working().with_custom_response(english_example));
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    let changed = MarkupAdapter::translate_file(&engine, &path).await.unwrap();

    assert_eq!(changed, 3);
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("<title>Contents of the Trade Register</title>"));
    // The type suffix of an ObjectTitle stays untranslated.
    assert!(content
        .contains(r#"<div class="ObjectTitle">Contents of the Trade Register: Class</div>"#));
    assert!(content.contains("<p>This is an example sentence about legal forms.</p>"));
    // Target-language text and nested markup are left alone.
    assert!(content.contains("<p>Already translated English text here.</p>"));
    assert!(content.contains(r#"<td><img src="x.png"/></td>"#));
    // Only the plain paragraph needed a live call.
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_markup_translateFile_shouldBeIdempotent() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(temp_dir.path(), "page.htm", MARKUP_FILE).unwrap();
    let backend = Arc::new(MockBackend::working().with_custom_response(english_example));
    let engine = engine_with_backend(backend.clone(), &temp_dir.path().join("cache.json"));

    MarkupAdapter::translate_file(&engine, &path).await.unwrap();
    let after_first = fs::read_to_string(&path).unwrap();
    let calls_after_first = backend.call_count();

    let changed = MarkupAdapter::translate_file(&engine, &path).await.unwrap();
    assert_eq!(changed, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    assert_eq!(backend.call_count(), calls_after_first);
}

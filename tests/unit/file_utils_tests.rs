/*!
 * Tests for file utilities
 */

#![allow(non_snake_case)]

use doctrans::file_utils::FileManager;

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_fileManager_fileExists_shouldDistinguishFilesAndDirs() {
    let temp_dir = create_temp_dir().unwrap();
    let file = create_test_file(temp_dir.path(), "a.xml", "content").unwrap();

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&file));
}

#[test]
fn test_fileManager_findFiles_shouldFilterByExtensionAndSort() {
    let temp_dir = create_temp_dir().unwrap();
    create_test_file(temp_dir.path(), "b.xml", "").unwrap();
    create_test_file(temp_dir.path(), "a.xml", "").unwrap();
    create_test_file(temp_dir.path(), "c.htm", "").unwrap();
    create_test_file(temp_dir.path(), "sub/d.xml", "").unwrap();

    let found = FileManager::find_files(temp_dir.path(), "xml", &[]).unwrap();
    let names: Vec<String> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.xml", "b.xml", "d.xml"]);
}

#[test]
fn test_fileManager_findFiles_shouldSkipExcludedDirs() {
    let temp_dir = create_temp_dir().unwrap();
    create_test_file(temp_dir.path(), "keep.xml", "").unwrap();
    create_test_file(temp_dir.path(), "guidmaps/skip.xml", "").unwrap();

    let excluded = vec!["guidmaps".to_string()];
    let found = FileManager::find_files(temp_dir.path(), "xml", &excluded).unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("keep.xml"));
}

#[test]
fn test_fileManager_findFiles_shouldMatchExtensionCaseInsensitively() {
    let temp_dir = create_temp_dir().unwrap();
    create_test_file(temp_dir.path(), "page.HTM", "").unwrap();

    let found = FileManager::find_files(temp_dir.path(), "htm", &[]).unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn test_fileManager_writeToFile_shouldCreateParentDirs() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("nested/dirs/out.txt");

    FileManager::write_to_file(&path, "inhoud").unwrap();
    assert_eq!(FileManager::read_to_string(&path).unwrap(), "inhoud");
}

/*!
 * Tests for file utility functions
 */

use std::fs;
use anyhow::Result;
use rpydialog::file_utils::FileManager;
use crate::common;

/// Test that dir_exists distinguishes directories from files
#[test]
fn test_dir_exists_withFileAndDir_shouldOnlyAcceptDir() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_dir_exists.tmp", "test content")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that find_files matches the extension case-insensitively and sorts results
#[test]
fn test_find_files_withMixedFiles_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "b.rpy", "")?;
    common::create_test_file(dir, "a.RPY", "")?;
    common::create_test_file(dir, "c.rpyc", "")?;
    common::create_test_file(dir, "notes.txt", "")?;
    common::create_test_file(dir, "sub/d.rpy", "")?;

    let files = FileManager::find_files(dir, "rpy", false)?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.RPY", "b.rpy"]);

    let files = FileManager::find_files(dir, ".rpy", true)?;
    assert_eq!(files.len(), 3);
    assert!(files.iter().any(|p| p.ends_with("sub/d.rpy")));

    Ok(())
}

/// Test that a missing directory yields no scripts instead of an error
#[test]
fn test_find_scripts_withMissingDirectory_shouldReturnEmpty() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let files = FileManager::find_scripts(temp_dir.path().join("missing"), "rpy", false)?;
    assert!(files.is_empty());
    Ok(())
}

/// Test that read_script names the source after its path
#[test]
fn test_read_script_withFile_shouldKeepPathAsName() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "s.rpy", "label start:\n")?;

    let source = FileManager::read_script(&path)?;

    assert_eq!(source.name, path.display().to_string());
    assert_eq!(source.content, "label start:\n");
    Ok(())
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("dialog.json");

    FileManager::write_to_file(&path, "{}")?;

    assert_eq!(fs::read_to_string(&path)?, "{}");
    Ok(())
}

/*!
 * Tests for file utility functions and the output sink
 */

use anyhow::Result;
use gutentrans::errors::SinkError;
use gutentrans::file_utils::{FileManager, OutputSink, DEFAULT_TITLE};
use gutentrans::TargetLanguage;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("a").join("b").join("out.txt");

    FileManager::write_to_file(&path, "content")?;

    assert_eq!(std::fs::read_to_string(&path)?, "content");
    Ok(())
}

/// Test the full layout of a saved translation
#[test]
fn test_sink_save_shouldWriteHeaderThenBody() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output_dir = temp_dir.path().join("output");
    let sink = OutputSink::new(&output_dir, DEFAULT_TITLE);

    let path = sink.save(TargetLanguage::Thai, "[TH]A\n\n[TH]B", None)?;

    assert_eq!(path, output_dir.join("the_art_of_public_speaking_translated_thai.txt"));
    let expected = format!(
        "The Art of Public Speaking - Translated to Thai\n{}\n\n[TH]A\n\n[TH]B",
        "=".repeat(60)
    );
    assert_eq!(std::fs::read_to_string(&path)?, expected);
    Ok(())
}

/// Test that saving an empty body still writes the header
#[test]
fn test_sink_save_withEmptyBody_shouldWriteHeaderOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let sink = OutputSink::new(temp_dir.path(), "Empty Book");

    let path = sink.save(TargetLanguage::Filipino, "", Some("empty.txt"))?;

    let content = std::fs::read_to_string(&path)?;
    assert!(content.starts_with("Empty Book - Translated to Filipino\n"));
    assert!(content.ends_with("\n\n"));
    Ok(())
}

/// Test that an unwritable destination names the path in the error
#[test]
fn test_sink_save_withFileAsDirectory_shouldReportPath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let blocker = common::create_test_file(temp_dir.path(), "blocker", "not a directory")?;
    let sink = OutputSink::new(&blocker, DEFAULT_TITLE);

    let result = sink.save(TargetLanguage::Tamil, "body", None);

    match result {
        Err(SinkError { path, .. }) => assert!(path.starts_with(&blocker)),
        Ok(path) => panic!("expected failure, wrote {:?}", path),
    }
    Ok(())
}

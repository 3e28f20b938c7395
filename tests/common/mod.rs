/*!
 * Common test utilities for the gutentrans test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use gutentrans::app_config::Config;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Wrap body lines in a Gutenberg-style header and footer
pub fn sample_book(lines: &[&str]) -> String {
    let mut text = String::from(
        "The Project Gutenberg eBook of The Art of Public Speaking\r\n\
         \r\n\
         This ebook is for the use of anyone anywhere.\r\n\
         *** START OF THE PROJECT GUTENBERG EBOOK THE ART OF PUBLIC SPEAKING ***\r\n",
    );
    for line in lines {
        text.push_str(line);
        text.push_str("\r\n");
    }
    text.push_str(
        "*** END OF THE PROJECT GUTENBERG EBOOK THE ART OF PUBLIC SPEAKING ***\r\n\
         Section 1. General Terms of Use\r\n",
    );
    text
}

/// A valid configuration writing into `output_dir`, without pacing
pub fn test_config(output_dir: &Path, source: &str, endpoint: &str) -> Config {
    let mut config = Config::default();
    config.target_language = "thai".to_string();
    config.source.location = source.to_string();
    config.translation.endpoint = endpoint.to_string();
    config.translation.api_key = "sk-test".to_string();
    config.translation.timeout_secs = 5;
    config.pipeline.pacing_delay_ms = 0;
    config.output.directory = output_dir.to_string_lossy().into_owned();
    config
}

/// Chat-completions response body with the given content
pub fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19}
    })
}

use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::SinkError;
use crate::language_utils::TargetLanguage;

// @module: File and directory utilities

/// Default book title written in the output header
pub const DEFAULT_TITLE: &str = "The Art of Public Speaking";

/// Default directory for translated books
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Width of the `=` rule under the header title
const HEADER_RULE_WIDTH: usize = 60;

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Write a string to a file, creating the parent directory first
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }
        fs::write(path, content)
    }

    // @generates: Default output file name from a title and language
    // e.g. "The Art of Public Speaking" + thai -> the_art_of_public_speaking_translated_thai.txt
    pub fn default_output_filename(title: &str, language: TargetLanguage) -> String {
        let slug = title
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("_");

        format!("{}_translated_{}.txt", slug, language.identifier())
    }
}

/// Writes a finished translation with its header to the output directory
#[derive(Debug, Clone)]
pub struct OutputSink {
    directory: PathBuf,
    title: String,
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, DEFAULT_TITLE)
    }
}

impl OutputSink {
    pub fn new(directory: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            title: title.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Header lines placed before the body
    pub fn header(&self, language: TargetLanguage) -> String {
        format!(
            "{} - Translated to {}\n{}\n\n",
            self.title,
            language.display_name(),
            "=".repeat(HEADER_RULE_WIDTH)
        )
    }

    /// Path the translation will be written to
    pub fn output_path(&self, language: TargetLanguage, filename: Option<&str>) -> PathBuf {
        let filename = match filename {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => FileManager::default_output_filename(&self.title, language),
        };
        self.directory.join(filename)
    }

    /// Save the translated text and return the path written
    pub fn save(&self, language: TargetLanguage, body: &str, filename: Option<&str>) -> Result<PathBuf, SinkError> {
        let path = self.output_path(language, filename);

        let mut content = self.header(language);
        content.push_str(body);

        FileManager::write_to_file(&path, &content).map_err(|source| SinkError {
            path: path.clone(),
            source,
        })?;

        info!("Translation saved to: {}", path.display());
        Ok(path)
    }
}

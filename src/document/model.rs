/*!
 * Core document model types for book translation.
 *
 * A document moves through the pipeline as a sequence of owned values:
 * `RawDocument` from the source, `CleanDocument` after boilerplate removal,
 * a list of `Chunk`s, one `TranslationResult` per chunk, and finally the
 * assembled `TranslatedDocument`.
 */

use serde::Serialize;

/// Separator placed between translated chunks in the final document.
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Text exactly as obtained from the source provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    text: String,
}

impl RawDocument {
    /// Wrap already decoded text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decode bytes as UTF-8, dropping a leading BOM and any invalid sequences.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        // Only the invalid byte runs go; a U+FFFD present in the source is kept
        let text = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Book content with provider boilerplate removed.
///
/// Every line is trimmed and non-empty; lines are joined with `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanDocument {
    lines: Vec<String>,
}

impl CleanDocument {
    /// Build a document from lines, trimming each and dropping blank ones.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines
                .into_iter()
                .filter_map(|line| {
                    let line = line.as_ref().trim();
                    (!line.is_empty()).then(|| line.to_string())
                })
                .collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The document as a single string
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Length in characters, counting the line separators
    pub fn len(&self) -> usize {
        let content: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        content + self.lines.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A bounded span of consecutive lines, the unit sent for translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Zero-based position in the document
    pub index: usize,
    /// Lines of the span joined by `\n`
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// How a chunk's result text was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChunkOutcome {
    /// The service returned a translation
    Translated,
    /// The service failed; the text is the untranslated original
    Fallback {
        /// Description of the failure
        reason: String,
    },
}

/// Result text for one chunk, keyed by the chunk's index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub index: usize,
    pub text: String,
    pub outcome: ChunkOutcome,
}

impl TranslationResult {
    pub fn translated(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            outcome: ChunkOutcome::Translated,
        }
    }

    /// Result carrying the original chunk text unchanged
    pub fn fallback(chunk: &Chunk, reason: impl Into<String>) -> Self {
        Self {
            index: chunk.index,
            text: chunk.text.clone(),
            outcome: ChunkOutcome::Fallback {
                reason: reason.into(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, ChunkOutcome::Fallback { .. })
    }
}

/// The assembled translation, in original chunk order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedDocument {
    results: Vec<TranslationResult>,
}

impl TranslatedDocument {
    /// Assemble results, ordering them by chunk index.
    pub fn assemble(mut results: Vec<TranslationResult>) -> Self {
        results.sort_by_key(|r| r.index);
        Self { results }
    }

    /// Final text: every result joined by a blank line
    pub fn text(&self) -> String {
        self.results
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(CHUNK_SEPARATOR)
    }

    pub fn results(&self) -> &[TranslationResult] {
        &self.results
    }

    /// Number of chunks whose translation fell back to the original text
    pub fn fallback_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_fallback()).count()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

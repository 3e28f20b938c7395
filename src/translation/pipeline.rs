/*!
 * Pipeline coordinator: load, normalize, chunk, translate in order, assemble.
 *
 * Chunks are translated strictly one after another with a pacing delay
 * between calls. Only a failure to load the source aborts the run; every
 * per-chunk failure has already been absorbed by the translation client.
 */

use std::time::Duration;

use crate::document::{chunker, Normalizer, TranslatedDocument};
use crate::errors::PipelineError;
use crate::language_utils::TargetLanguage;
use crate::source::DocumentSource;

use super::core::{TranslationClient, TranslationRequest};
use super::log_capture::LogCapture;

/// Default wait between consecutive translation calls
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_millis(1000);

/// Coordinator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Loading,
    Normalizing,
    Chunking,
    /// Translating the chunk at this index
    Translating(usize),
    Assembled,
    /// Loading failed; the run is over
    Failed,
}

/// Settings for chunking and pacing
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub max_chunk_chars: usize,
    pub pacing_delay: Duration,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_chunk_chars: chunker::DEFAULT_MAX_CHUNK_CHARS,
            pacing_delay: DEFAULT_PACING_DELAY,
        }
    }
}

/// Runs one document through the whole translation pipeline
pub struct Pipeline {
    source: Box<dyn DocumentSource>,
    normalizer: Normalizer,
    client: TranslationClient,
    target_language: TargetLanguage,
    options: PipelineOptions,
    log: LogCapture,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(
        source: Box<dyn DocumentSource>,
        client: TranslationClient,
        target_language: TargetLanguage,
        options: PipelineOptions,
        log: LogCapture,
    ) -> Self {
        Self {
            source,
            normalizer: Normalizer::default(),
            client,
            target_language,
            options,
            log,
            state: PipelineState::Idle,
        }
    }

    /// Use different boilerplate markers
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn client(&self) -> &TranslationClient {
        &self.client
    }

    /// Run the pipeline to completion
    pub async fn run(&mut self) -> Result<TranslatedDocument, PipelineError> {
        self.run_with_progress(|_, _| {}).await
    }

    /// Run the pipeline, reporting `(completed, total)` after each chunk
    pub async fn run_with_progress<F>(&mut self, mut on_progress: F) -> Result<TranslatedDocument, PipelineError>
    where
        F: FnMut(usize, usize),
    {
        self.state = PipelineState::Loading;
        let raw = match self.source.load().await {
            Ok(raw) => raw,
            Err(e) => {
                self.state = PipelineState::Failed;
                self.log.error(format!("Failed to load {}: {}", self.source.location(), e));
                return Err(e.into());
            }
        };

        self.state = PipelineState::Normalizing;
        let clean = self.normalizer.clean(&raw);
        drop(raw);

        self.state = PipelineState::Chunking;
        let chunks = chunker::split(&clean, self.options.max_chunk_chars);
        let total = chunks.len();

        if total == 0 {
            self.log.warn("No content to translate after cleaning the source document");
        }

        let mut results = Vec::with_capacity(total);
        for chunk in &chunks {
            if chunk.index > 0 && !self.options.pacing_delay.is_zero() {
                tokio::time::sleep(self.options.pacing_delay).await;
            }

            self.state = PipelineState::Translating(chunk.index);
            let request = TranslationRequest {
                target_language: self.target_language,
                chunk,
                total,
            };
            results.push(self.client.translate(&request).await);
            on_progress(chunk.index + 1, total);
        }

        let document = TranslatedDocument::assemble(results);
        self.state = PipelineState::Assembled;

        let fallbacks = document.fallback_count();
        if fallbacks > 0 {
            self.log.warn(format!(
                "{} of {} chunks were left untranslated",
                fallbacks,
                document.len()
            ));
        }
        self.log.info("Translation completed successfully");

        Ok(document)
    }
}

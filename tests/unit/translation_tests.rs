/*!
 * Tests for the translation client and pipeline coordinator
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use gutentrans::document::{Chunk, ChunkOutcome, RawDocument};
use gutentrans::errors::{FetchError, PipelineError};
use gutentrans::providers::mock::MockProvider;
use gutentrans::source::DocumentSource;
use gutentrans::translation::{
    GenerationSettings, LogCapture, Pipeline, PipelineOptions, PipelineState, TranslationClient,
    TranslationRequest,
};
use gutentrans::TargetLanguage;
use crate::common;

#[derive(Debug)]
struct InMemorySource(String);

#[async_trait]
impl DocumentSource for InMemorySource {
    async fn load(&self) -> Result<RawDocument, FetchError> {
        Ok(RawDocument::new(self.0.clone()))
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[derive(Debug)]
struct UnreachableSource;

#[async_trait]
impl DocumentSource for UnreachableSource {
    async fn load(&self) -> Result<RawDocument, FetchError> {
        Err(FetchError::Status {
            url: self.location(),
            status_code: 404,
        })
    }

    fn location(&self) -> String {
        "https://example.invalid/book.txt".to_string()
    }
}

fn client(provider: &MockProvider, log: &LogCapture) -> TranslationClient {
    TranslationClient::new(Arc::new(provider.clone()), GenerationSettings::default(), log.clone())
}

fn no_pacing(max_chunk_chars: usize) -> PipelineOptions {
    PipelineOptions {
        max_chunk_chars,
        pacing_delay: Duration::ZERO,
    }
}

/// The prompt names the target language and carries the chunk verbatim
#[tokio::test]
async fn test_translate_withWorkingProvider_shouldSendLanguageAndText() {
    let provider = MockProvider::working();
    let log = LogCapture::new();
    let chunk = Chunk::new(0, "Friends, Romans, countrymen");

    let result = client(&provider, &log)
        .translate(&TranslationRequest {
            target_language: TargetLanguage::Vietnamese,
            chunk: &chunk,
            total: 1,
        })
        .await;

    assert_eq!(result.outcome, ChunkOutcome::Translated);
    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].system.contains("Vietnamese"));
    assert!(requests[0].user.contains("Vietnamese"));
    assert_eq!(MockProvider::chunk_text(&requests[0].user), "Friends, Romans, countrymen");
    assert_eq!(requests[0].max_tokens, 4000);
}

/// Empty responses are treated like failures
#[tokio::test]
async fn test_translate_withEmptyResponse_shouldFallBack() {
    let provider = MockProvider::empty();
    let log = LogCapture::new();
    let chunk = Chunk::new(3, "Original words");

    let result = client(&provider, &log)
        .translate(&TranslationRequest {
            target_language: TargetLanguage::Tamil,
            chunk: &chunk,
            total: 5,
        })
        .await;

    assert!(result.is_fallback());
    assert_eq!(result.text, "Original words");
    assert_eq!(result.index, 3);
    let issues = log.issues();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("chunk 4/5"));
}

/// A service that always fails still yields a full-length document of originals
#[tokio::test]
async fn test_pipeline_withFailingProvider_shouldReturnOriginalText() {
    let provider = MockProvider::failing();
    let log = LogCapture::new();
    let source = InMemorySource(common::sample_book(&["First line.", "Second line.", "Third line."]));
    let mut pipeline = Pipeline::new(
        Box::new(source),
        client(&provider, &log),
        TargetLanguage::Indonesian,
        no_pacing(1),
        log.clone(),
    );

    let document = pipeline.run().await.unwrap();

    assert_eq!(document.len(), 3);
    assert_eq!(document.fallback_count(), 3);
    assert_eq!(document.text(), "First line.\n\nSecond line.\n\nThird line.");
    assert_eq!(provider.request_count(), 3);
    assert_eq!(log.count(log::Level::Warn), 4);
}

/// Chunks are sent in document order, one request per chunk
#[tokio::test]
async fn test_pipeline_shouldTranslateChunksInOrder() {
    let provider = MockProvider::working();
    let log = LogCapture::new();
    let source = InMemorySource(common::sample_book(&["alpha", "beta", "gamma", "delta"]));
    let mut pipeline = Pipeline::new(
        Box::new(source),
        client(&provider, &log),
        TargetLanguage::Thai,
        no_pacing(11),
        log.clone(),
    );

    let document = pipeline.run().await.unwrap();

    let sent: Vec<String> = provider
        .requests()
        .iter()
        .map(|r| MockProvider::chunk_text(&r.user).to_string())
        .collect();
    assert_eq!(sent, vec!["alpha\nbeta", "gamma\ndelta"]);
    assert_eq!(
        document.text(),
        "[TRANSLATED] alpha\nbeta\n\n[TRANSLATED] gamma\ndelta"
    );
    assert!(pipeline.client().token_usage().total_tokens > 0);
}

/// A fetch failure aborts the run without calling the service
#[tokio::test]
async fn test_pipeline_withUnreachableSource_shouldFailWithFetchError() {
    let provider = MockProvider::working();
    let log = LogCapture::new();
    let mut pipeline = Pipeline::new(
        Box::new(UnreachableSource),
        client(&provider, &log),
        TargetLanguage::Thai,
        no_pacing(100),
        log.clone(),
    );

    let error = pipeline.run().await.unwrap_err();

    assert!(matches!(
        error,
        PipelineError::Fetch(FetchError::Status { status_code: 404, .. })
    ));
    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert_eq!(provider.request_count(), 0);
    assert_eq!(log.count(log::Level::Error), 1);
}

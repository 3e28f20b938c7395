/*!
 * Core translation client.
 *
 * The client turns one chunk into one `TranslationResult`. Provider failures
 * never reach the caller: the chunk's original text is returned instead and
 * the failure is recorded in the run's `LogCapture`.
 */

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::document::{Chunk, TranslationResult};
use crate::language_utils::TargetLanguage;
use crate::providers::{CompletionRequest, Provider};

use super::log_capture::LogCapture;
use super::prompts::TranslationPromptBuilder;

/// Default generation-length cap
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Default sampling temperature; kept low so translations stay close to the source
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Token usage statistics for tracking API consumption
#[derive(Debug, Clone)]
pub struct TokenUsageStats {
    /// Number of prompt tokens
    pub prompt_tokens: u64,

    /// Number of completion tokens
    pub completion_tokens: u64,

    /// Total number of tokens
    pub total_tokens: u64,

    /// Start time of token tracking
    pub start_time: Instant,

    /// Total time spent on API requests
    pub api_duration: Duration,

    /// Model name
    pub model: String,
}

impl Default for TokenUsageStats {
    fn default() -> Self {
        Self::with_model(String::new())
    }
}

impl TokenUsageStats {
    /// Create new token usage stats for a model
    pub fn with_model(model: String) -> Self {
        Self {
            prompt_tokens: 0,
            completion_tokens: 0,
            total_tokens: 0,
            start_time: Instant::now(),
            api_duration: Duration::from_secs(0),
            model,
        }
    }

    /// Add token usage numbers
    pub fn add_token_usage(&mut self, prompt_tokens: Option<u64>, completion_tokens: Option<u64>) {
        if let Some(pt) = prompt_tokens {
            self.prompt_tokens += pt;
            self.total_tokens += pt;
        }

        if let Some(ct) = completion_tokens {
            self.completion_tokens += ct;
            self.total_tokens += ct;
        }
    }

    /// Add API request duration
    pub fn add_request_duration(&mut self, duration: Duration) {
        self.api_duration += duration;
    }

    /// Calculate tokens per minute rate
    pub fn tokens_per_minute(&self) -> f64 {
        // Use the API duration for rate calculation, with fallback to elapsed time
        let duration_minutes = if self.api_duration.as_secs_f64() > 0.0 {
            self.api_duration.as_secs_f64() / 60.0
        } else {
            self.start_time.elapsed().as_secs_f64() / 60.0
        };

        if duration_minutes > 0.0 {
            self.total_tokens as f64 / duration_minutes
        } else {
            0.0
        }
    }

    /// One-line summary of token usage
    pub fn summary(&self) -> String {
        let api_time = if self.api_duration.as_secs_f64() > 0.0 {
            format!(" in {:.1}s of API time", self.api_duration.as_secs_f64())
        } else {
            String::new()
        };

        format!(
            "Token usage for {}: {} total ({} prompt, {} completion){} at {:.0} tokens/min",
            self.model,
            self.total_tokens,
            self.prompt_tokens,
            self.completion_tokens,
            api_time,
            self.tokens_per_minute()
        )
    }
}

/// One chunk to translate, with its position in the document
#[derive(Debug, Clone)]
pub struct TranslationRequest<'a> {
    pub target_language: TargetLanguage,
    pub chunk: &'a Chunk,
    /// Total number of chunks in the document
    pub total: usize,
}

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Translates single chunks through a provider, falling back to the original text
#[derive(Debug, Clone)]
pub struct TranslationClient {
    provider: Arc<dyn Provider>,
    prompts: TranslationPromptBuilder,
    settings: GenerationSettings,
    log: LogCapture,
    usage: Arc<Mutex<TokenUsageStats>>,
}

impl TranslationClient {
    pub fn new(provider: Arc<dyn Provider>, settings: GenerationSettings, log: LogCapture) -> Self {
        let usage = TokenUsageStats::with_model(provider.model().to_string());
        Self {
            provider,
            prompts: TranslationPromptBuilder::default(),
            settings,
            log,
            usage: Arc::new(Mutex::new(usage)),
        }
    }

    /// Replace the prompt builder
    pub fn with_prompts(mut self, prompts: TranslationPromptBuilder) -> Self {
        self.prompts = prompts;
        self
    }

    /// Build the provider request for a chunk
    pub fn build_request(&self, request: &TranslationRequest<'_>) -> CompletionRequest {
        CompletionRequest {
            system: self.prompts.system_prompt(request.target_language),
            user: self.prompts.user_prompt(request.target_language, &request.chunk.text),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    /// Translate one chunk.
    ///
    /// Never fails: on any provider error the result holds the chunk's
    /// original text and a `Fallback` outcome.
    pub async fn translate(&self, request: &TranslationRequest<'_>) -> TranslationResult {
        let chunk = request.chunk;
        let position = chunk.index + 1;

        self.log.info(format!("Translating chunk {}/{}", position, request.total));

        let start_time = Instant::now();
        let result = self.provider.complete(self.build_request(request)).await;
        let elapsed = start_time.elapsed();

        match result {
            Ok(completion) => {
                {
                    let mut usage = self.usage.lock();
                    usage.add_token_usage(completion.prompt_tokens, completion.completion_tokens);
                    usage.add_request_duration(elapsed);
                }
                self.log.debug(format!(
                    "Chunk {}/{} translated in {:?}",
                    position, request.total, elapsed
                ));
                TranslationResult::translated(chunk.index, completion.text)
            }
            Err(e) => {
                self.log.warn(format!(
                    "Failed to translate chunk {}/{}: {}. Keeping original text",
                    position, request.total, e
                ));
                TranslationResult::fallback(chunk, e.to_string())
            }
        }
    }

    /// Snapshot of token usage so far
    pub fn token_usage(&self) -> TokenUsageStats {
        self.usage.lock().clone()
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }
}

/*!
 * Provider implementations for translation services.
 *
 * - `openai`: OpenAI-compatible chat completions (SEA-LION by default)
 * - `mock`: scripted provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A provider-neutral completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Instruction describing the assistant's role
    pub system: String,
    /// The user turn, holding the text to translate
    pub user: String,
    /// Generation-length cap
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Text returned by a provider along with optional token counts
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Completion {
    pub text: String,
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
}

/// Common trait for all LLM providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the translation client.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Completion, ProviderError>` - The response text or an error
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ProviderError>;

    /// Model identifier, used in logs
    fn model(&self) -> &str;
}

pub mod mock;
pub mod openai;

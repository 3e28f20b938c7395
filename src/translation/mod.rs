/*!
 * Translation of a book through an LLM provider.
 *
 * - `core`: per-chunk translation client with fallback and token accounting
 * - `pipeline`: coordinator that sequences the whole run
 * - `prompts`: prompt templates
 * - `log_capture`: explicit log handle passed through a run
 */

// Re-export main types for easier usage
pub use self::core::{GenerationSettings, TokenUsageStats, TranslationClient, TranslationRequest};
pub use self::log_capture::{LogCapture, LogEntry};
pub use self::pipeline::{Pipeline, PipelineOptions, PipelineState};
pub use self::prompts::{PromptTemplate, TranslationPromptBuilder};

// Submodules
pub mod core;
pub mod log_capture;
pub mod pipeline;
pub mod prompts;

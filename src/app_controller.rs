use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::{FileManager, OutputSink};
use crate::language_utils::TargetLanguage;
use crate::providers::Provider;
use crate::providers::openai::OpenAI;
use crate::source::{self, DocumentSource};
use crate::translation::{
    GenerationSettings, LogCapture, Pipeline, PipelineOptions, TokenUsageStats, TranslationClient,
};

// @module: Application controller for book translation

/// Name of the file collecting warnings and errors of each run
pub const ISSUES_LOG_FILENAME: &str = "gutentrans.issues.log";

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub language: TargetLanguage,
    pub chunks: usize,
    pub fallbacks: usize,
    pub token_usage: TokenUsageStats,
}

/// Main application controller for book translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Provider override, built from the config when absent
    provider: Option<Arc<dyn Provider>>,
    // @field: Source override, built from the config when absent
    source: Option<Box<dyn DocumentSource>>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            provider: None,
            source: None,
        }
    }

    /// Translate with this provider instead of the configured endpoint
    pub fn with_provider(mut self, provider: Arc<dyn Provider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Read the book from this source instead of the configured location
    pub fn with_source(mut self, source: Box<dyn DocumentSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole workflow: validate, translate and save
    pub async fn run(self) -> Result<RunSummary, AppError> {
        // Nothing touches the network before the config is known to be good
        let language = self.config.validate()?;
        let start_time = std::time::Instant::now();

        let log = LogCapture::new();
        let provider: Arc<dyn Provider> = match self.provider {
            Some(provider) => provider,
            None => {
                let translation = &self.config.translation;
                Arc::new(OpenAI::new(
                    translation.api_key.clone(),
                    translation.endpoint.clone(),
                    translation.model.clone(),
                    Duration::from_secs(translation.timeout_secs),
                ))
            }
        };
        let source = self.source.unwrap_or_else(|| {
            source::from_location(
                &self.config.source.location,
                Duration::from_secs(self.config.source.timeout_secs),
            )
        });

        let settings = GenerationSettings {
            max_tokens: self.config.translation.max_tokens,
            temperature: self.config.translation.temperature,
        };
        let client = TranslationClient::new(provider, settings, log.clone());
        let options = PipelineOptions {
            max_chunk_chars: self.config.pipeline.max_chunk_chars,
            pacing_delay: self.config.pipeline.pacing_delay(),
        };

        info!("Starting translation to {} with {}", language.display_name(), client.model());
        debug!("Source: {}", source.location());

        let mut pipeline = Pipeline::new(source, client, language, options, log.clone());

        let progress_bar = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar.set_message("Translating");

        let pb = progress_bar.clone();
        let result = pipeline
            .run_with_progress(move |completed, total| {
                pb.set_length(total as u64);
                pb.set_position(completed as u64);
            })
            .await;
        progress_bar.finish_and_clear();

        let output_dir = PathBuf::from(&self.config.output.directory);
        let context = format!(
            "{} - {} ({})",
            language.display_name(),
            pipeline.client().model(),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        let document = match result {
            Ok(document) => document,
            Err(e) => {
                Self::write_issues(&log, &output_dir, &context);
                return Err(e.into());
            }
        };

        let token_usage = pipeline.client().token_usage();
        info!("{}", token_usage.summary());

        let sink = OutputSink::new(output_dir.clone(), self.config.output.title.clone());
        let output_path = match sink.save(language, &document.text(), self.config.output.filename.as_deref()) {
            Ok(path) => path,
            Err(e) => {
                Self::write_issues(&log, &output_dir, &context);
                return Err(e.into());
            }
        };

        Self::write_issues(&log, &output_dir, &context);

        info!("Translation completed in {}.", Self::format_duration(start_time.elapsed()));

        Ok(RunSummary {
            output_path,
            language,
            chunks: document.len(),
            fallbacks: document.fallback_count(),
            token_usage,
        })
    }

    // @writes: Captured warnings and errors to the issues log, never failing the run
    fn write_issues(log: &LogCapture, output_dir: &Path, context: &str) {
        let warnings = log.count(log::Level::Warn);
        let errors = log.count(log::Level::Error);
        if warnings == 0 && errors == 0 {
            return;
        }
        info!("Translation finished with {} errors and {} warnings.", errors, warnings);

        if let Err(e) = FileManager::ensure_dir(output_dir) {
            warn!("Failed to create {}: {}", output_dir.display(), e);
            return;
        }

        let log_file_path = output_dir.join(ISSUES_LOG_FILENAME);
        match log.write_issues_to_file(&log_file_path, context) {
            Ok(true) => info!("Issues written to {}", log_file_path.display()),
            Ok(false) => {}
            Err(e) => warn!("Failed to write logs to file: {}", e),
        }
    }

    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

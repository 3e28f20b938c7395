// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use gutentrans::app_config::{self, Config};
use gutentrans::{Controller, TargetLanguage};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate the book (default command)
    Translate(TranslateArgs),

    /// List the supported target languages
    Languages,

    /// Generate shell completions for gutentrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
struct TranslateArgs {
    /// Target language (indonesian, filipino, tamil, thai, vietnamese)
    #[arg(short, long)]
    language: Option<String>,

    /// API key for the translation service
    #[arg(short = 'k', long, env = "SEALION_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Output file name
    #[arg(short, long)]
    output: Option<String>,

    /// Output directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Book URL or local file path
    #[arg(short, long)]
    source: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Maximum characters per chunk
    #[arg(long)]
    max_chunk_chars: Option<usize>,

    /// Delay between translation requests in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// gutentrans - Project Gutenberg book translation with AI
///
/// Downloads a public-domain book, strips the Gutenberg licence text and
/// translates it chunk by chunk into a Southeast Asian language.
#[derive(Parser, Debug)]
#[command(name = "gutentrans")]
#[command(version)]
#[command(about = "Translate Project Gutenberg books into Southeast Asian languages")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "gutentrans downloads a Project Gutenberg book and translates it with an OpenAI-compatible LLM service.

EXAMPLES:
    gutentrans -l thai                              # Translate the default book to Thai
    gutentrans -l vi -s book.txt                    # Translate a local file to Vietnamese
    gutentrans -l tamil --max-chunk-chars 2000      # Use smaller chunks
    gutentrans translate -l fil -o talumpati.txt    # Choose the output file name
    gutentrans languages                            # List supported languages
    gutentrans completions bash > gutentrans.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. The API key is read from --api-key, the
    SEALION_API_KEY environment variable or the config file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // The effective level is log::max_level, adjusted once the config is loaded
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    let _ = CustomLogger::init(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "gutentrans", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages) => {
            list_languages();
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => run_translate(cli.translate).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn list_languages() {
    for language in TargetLanguage::ALL {
        println!("{:<12} {} ({})", language.identifier(), language.display_name(), language.iso_639_3());
    }
}

// @applies: CLI options on top of the loaded configuration
fn apply_overrides(config: &mut Config, options: TranslateArgs) {
    if let Some(language) = options.language {
        config.target_language = language;
    }
    if let Some(api_key) = options.api_key {
        config.translation.api_key = api_key;
    }
    if let Some(output) = options.output {
        config.output.filename = Some(output);
    }
    if let Some(output_dir) = options.output_dir {
        config.output.directory = output_dir.to_string_lossy().into_owned();
    }
    if let Some(source) = options.source {
        config.source.location = source;
    }
    if let Some(model) = options.model {
        config.translation.model = model;
    }
    if let Some(max_chunk_chars) = options.max_chunk_chars {
        config.pipeline.max_chunk_chars = max_chunk_chars;
    }
    if let Some(delay_ms) = options.delay_ms {
        config.pipeline.pacing_delay_ms = delay_ms;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.into());
    }

    let mut config = Config::load_or_create(&options.config_path)?;
    apply_overrides(&mut config, options);
    log::set_max_level(config.log_level.into());

    debug!("Using model {} at {}", config.translation.model, config.translation.endpoint);

    let summary = Controller::with_config(config)
        .run()
        .await
        .context("Translation failed")?;

    println!("Translation saved to: {}", summary.output_path.display());
    println!("Language: {}", summary.language.display_name());
    if summary.fallbacks > 0 {
        println!(
            "{} of {} chunks kept in the original language",
            summary.fallbacks, summary.chunks
        );
    }

    Ok(())
}

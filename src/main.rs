// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use echosign::app_config::{self, Config, SignMode};
use echosign::speech::LineSpeechSource;
use echosign::translator::Translation;
use echosign::Controller;

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

/// CLI Wrapper for SignMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSignMode {
    Asl,
    Fingerspell,
}

impl From<CliSignMode> for SignMode {
    fn from(cli_mode: CliSignMode) -> Self {
        match cli_mode {
            CliSignMode::Asl => SignMode::Asl,
            CliSignMode::Fingerspell => SignMode::Fingerspell,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the gloss and resolved signs for a sentence
    Translate {
        /// Sentence to translate
        #[arg(value_name = "TEXT", required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the translation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate a sentence and play its signs
    Play {
        /// Sentence to play
        #[arg(value_name = "TEXT", required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Read recognized utterances from stdin, one per line, and play each
    Listen,

    /// List the sign catalog
    Dictionary {
        /// Only show signs in this category
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Print per-category counts instead of entries
        #[arg(long)]
        stats: bool,
    },

    /// Generate shell completions for echosign
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// echosign - speech to sign language
///
/// Converts English sentences to sign language gloss and plays the matching
/// signs, fingerspelling words that have no sign.
#[derive(Parser, Debug)]
#[command(name = "echosign")]
#[command(version)]
#[command(about = "Speech to sign language translator")]
#[command(long_about = "echosign converts English sentences into sign language gloss order and plays the signs one by one.

EXAMPLES:
    echosign translate Thank you for your help      # Show gloss and resolved signs
    echosign translate --json Where is the bathroom # Same, as JSON
    echosign play I want water today                # Play signs at the configured pace
    echosign --interval-ms 800 listen               # Play each line read from stdin
    echosign dictionary --category questions        # List signs in a category
    echosign completions bash > echosign.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in <config dir>/echosign/conf.json by default. You can
    specify a different file with --config. If the file doesn't exist, a default
    one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Milliseconds each sign stays on screen
    #[arg(long, global = true)]
    interval_ms: Option<u64>,

    /// Show sign graphics or always fingerspell
    #[arg(long, value_enum, global = true)]
    sign_mode: Option<CliSignMode>,

    /// Vocabulary JSON file replacing the built-in one
    #[arg(long, global = true)]
    vocabulary: Option<PathBuf>,
}

// @struct: Custom logger implementation
// @filters: By the global max level, which is updated after the config loads
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Marker for log level
    fn get_marker_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "✖",
            Level::Warn => "⚠",
            Level::Info => "•",
            Level::Debug => "›",
            Level::Trace => "·",
        }
    }

    // @returns: ANSI colour for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_marker_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Start at info; the level is updated once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "echosign", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let config = load_config(&cli)?;

    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Translate { text, json } => run_translate(&controller, &text.join(" "), json),
        Commands::Play { text } => run_play(&controller, &text.join(" ")).await,
        Commands::Listen => run_listen(&controller).await,
        Commands::Dictionary { category, stats } => {
            run_dictionary(&controller, category.as_deref(), stats);
            Ok(())
        }
        Commands::Completions { .. } => Ok(()),
    }
}

/// Load or create the config file and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    debug!("Using config file {}", config_path.display());

    let mut config = Config::load_or_create(&config_path)?;

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.playback.interval_ms = interval_ms;
    }
    if let Some(sign_mode) = &cli.sign_mode {
        config.preferences.sign_mode = sign_mode.clone().into();
    }
    if let Some(vocabulary) = &cli.vocabulary {
        config.vocabulary_path = Some(vocabulary.clone());
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn run_translate(controller: &Controller, text: &str, json: bool) -> Result<()> {
    let translation = controller.translate(text);

    if json {
        let output =
            serde_json::to_string_pretty(&translation).context("Failed to serialize translation")?;
        println!("{}", output);
    } else {
        print_translation(&translation);
    }

    Ok(())
}

async fn run_play(controller: &Controller, text: &str) -> Result<()> {
    tokio::select! {
        result = controller.play(text) => {
            let translation = result?;
            if translation.is_empty() {
                warn!("Nothing to sign in \"{}\"", text);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            controller.stop().await?;
            warn!("Playback interrupted");
        }
    }
    Ok(())
}

async fn run_listen(controller: &Controller) -> Result<()> {
    let mut source = LineSpeechSource::stdin();

    tokio::select! {
        result = controller.listen(&mut source) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            controller.stop().await?;
            warn!("Listening interrupted");
        }
    }
    Ok(())
}

fn run_dictionary(controller: &Controller, category: Option<&str>, stats: bool) {
    let signs = &controller.translator().resolver().lexicon().signs;

    if stats {
        println!("{}", signs.stats());
        return;
    }

    let entries = match category {
        Some(category) => signs.signs_in_category(category),
        None => signs.iter().collect(),
    };

    if entries.is_empty() {
        warn!("No signs found");
    }
    for entry in entries {
        println!("{:<12} {:<12} {}", entry.word, entry.category, entry.description);
    }
}

fn print_translation(translation: &Translation) {
    println!("Input:      {}", translation.source.trim());
    println!("Normalized: {}", translation.normalized.join(" "));
    println!("Gloss:      {}", translation.gloss);
    println!();

    for resolved in &translation.resolved {
        match &resolved.sign {
            Some(sign) if resolved.token != sign.word => println!(
                "  {:<12} -> {:<10} [{}] {}",
                resolved.token, sign.word, resolved.match_kind, sign.description
            ),
            Some(sign) => println!(
                "  {:<12}    {:<10} [{}] {}",
                resolved.token, "", resolved.match_kind, sign.description
            ),
            None => println!("  {:<12}    {:<10} [{}]", resolved.token, "", resolved.match_kind),
        }
    }

    let stats = &translation.stats;
    println!();
    println!(
        "{} words -> {} signs ({:.0}% reduction)",
        stats.source_words, stats.gloss_words, stats.reduction_percent
    );
}

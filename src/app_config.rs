use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration module
/// This module handles loading, validating and saving the echosign settings.
/// The pipeline itself only reads the vocabulary path; everything else is
/// consumed by the playback and rendering layers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Playback timing
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// User preferences passed through to rendering
    #[serde(default)]
    pub preferences: Preferences,

    /// Sign resolution settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// JSON vocabulary replacing the built-in word sets, phrases, aliases and signs
    #[serde(default)]
    pub vocabulary_path: Option<PathBuf>,

    /// Directory holding `<display_key>.gif` sign graphics
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
}

/// Playback configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Time each sign stays on screen, in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Start playing as soon as an utterance is translated
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

impl PlaybackConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            autoplay: default_true(),
        }
    }
}

/// How resolved tokens are shown
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SignMode {
    /// Sign graphics where available, fingerspelling otherwise
    #[default]
    Asl,
    /// Always fingerspell
    Fingerspell,
}

impl std::fmt::Display for SignMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignMode::Asl => write!(f, "asl"),
            SignMode::Fingerspell => write!(f, "fingerspell"),
        }
    }
}

impl std::str::FromStr for SignMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asl" => Ok(Self::Asl),
            "fingerspell" => Ok(Self::Fingerspell),
            _ => Err(anyhow!("Invalid sign mode: {}", s)),
        }
    }
}

/// User preferences
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub sign_mode: SignMode,

    /// Print the English caption above the signs
    #[serde(default = "default_true")]
    pub captions_enabled: bool,

    /// Free-form note such as "daily conversation" or "learning"
    #[serde(default)]
    pub usage_purpose: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sign_mode: SignMode::default(),
            captions_enabled: default_true(),
            usage_purpose: String::new(),
        }
    }
}

/// Resolver configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Memoize resolution results
    #[serde(default = "default_true")]
    pub cache_enabled: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cache_enabled: default_true(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_interval_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.playback.interval_ms == 0 {
            return Err(anyhow!("Playback interval must be greater than zero"));
        }

        if let Some(path) = &self.vocabulary_path {
            if !path.exists() {
                return Err(anyhow!("Vocabulary file not found: {}", path.display()));
            }
        }

        Ok(())
    }

    /// Default location: `<config dir>/echosign/conf.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("echosign")
            .join("conf.json")
    }

    /// Read a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create config file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).context("Failed to serialize config")?;
        writer.flush().context("Failed to write config file")?;

        Ok(())
    }

    /// Load the file if it exists, otherwise write and return the defaults
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found, creating default at {}", path.display());
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            playback: PlaybackConfig::default(),
            preferences: Preferences::default(),
            resolver: ResolverConfig::default(),
            vocabulary_path: None,
            assets_dir: None,
        }
    }
}

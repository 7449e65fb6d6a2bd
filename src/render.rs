/*!
 * Rendering of resolved tokens.
 *
 * `RenderInstruction` is what a display surface needs for one token: either a
 * sign graphic or the letters to fingerspell. `ConsoleSink` is the terminal
 * surface used by the CLI; it plugs into the sequencer as a playback observer.
 */

use std::io::Write;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use crate::app_config::{Config, SignMode};
use crate::gloss::GlossSequence;
use crate::playback::{PlaybackObserver, StopAck};
use crate::resolver::ResolvedToken;

/// What to show for one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderInstruction {
    Sign {
        word: String,
        display_key: String,
        description: String,
        category: String,
        /// Graphic file when an assets directory is configured
        asset: Option<PathBuf>,
    },
    Fingerspell {
        token: String,
        letters: Vec<char>,
    },
}

impl RenderInstruction {
    pub fn is_fingerspelled(&self) -> bool {
        matches!(self, RenderInstruction::Fingerspell { .. })
    }
}

impl std::fmt::Display for RenderInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderInstruction::Sign {
                word, description, ..
            } => write!(f, "{}: {}", word, description),
            RenderInstruction::Fingerspell { token, letters } => {
                let spelled: Vec<String> = letters.iter().map(|c| c.to_string()).collect();
                write!(f, "{} (fingerspell: {})", token, spelled.join("-"))
            }
        }
    }
}

/// Rendering preferences taken from the configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub sign_mode: SignMode,
    pub captions_enabled: bool,
    pub assets_dir: Option<PathBuf>,
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sign_mode: config.preferences.sign_mode,
            captions_enabled: config.preferences.captions_enabled,
            assets_dir: config.assets_dir.clone(),
        }
    }

    /// Decide how to show a resolved token
    ///
    /// Unresolved tokens and fingerspell mode always spell. With an assets
    /// directory, a sign whose graphic is missing is spelled as well.
    pub fn instruction_for(&self, resolved: &ResolvedToken) -> RenderInstruction {
        let sign = match (&resolved.sign, self.sign_mode) {
            (Some(sign), SignMode::Asl) => sign,
            _ => return fingerspell(&resolved.token),
        };

        let asset = match &self.assets_dir {
            Some(dir) => match asset_path(dir, &sign.display_key) {
                Some(path) => Some(path),
                None => {
                    debug!("No graphic for '{}', fingerspelling", sign.display_key);
                    return fingerspell(&resolved.token);
                }
            },
            None => None,
        };

        RenderInstruction::Sign {
            word: sign.word.clone(),
            display_key: sign.display_key.clone(),
            description: sign.description.clone(),
            category: sign.category.clone(),
            asset,
        }
    }
}

/// Letters to spell for a token; non-alphanumeric characters are skipped
pub fn fingerspell(token: &str) -> RenderInstruction {
    RenderInstruction::Fingerspell {
        token: token.to_string(),
        letters: token
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(|c| c.to_uppercase())
            .collect(),
    }
}

fn asset_path(dir: &Path, display_key: &str) -> Option<PathBuf> {
    let path = dir.join(format!("{}.gif", display_key));
    path.is_file().then_some(path)
}

/// Terminal rendering sink with a progress bar per run
pub struct ConsoleSink {
    options: RenderOptions,
    current: Mutex<Option<(Uuid, ProgressBar)>>,
}

impl ConsoleSink {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            current: Mutex::new(None),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Print the caption for the next utterance when captions are enabled
    pub fn show_caption(&self, text: &str) {
        let _ = self.write_caption(&mut std::io::stdout().lock(), text);
    }

    /// Print a gloss that will not be played
    pub fn show_gloss(&self, gloss: &GlossSequence) {
        let _ = self.write_gloss(&mut std::io::stdout().lock(), gloss);
    }

    pub fn write_caption<W: Write>(&self, out: &mut W, text: &str) -> std::io::Result<()> {
        if self.options.captions_enabled {
            writeln!(out, "\n\"{}\"", text.trim())?;
        }
        Ok(())
    }

    pub fn write_gloss<W: Write>(&self, out: &mut W, gloss: &GlossSequence) -> std::io::Result<()> {
        if !gloss.is_empty() {
            writeln!(out, "  {}", gloss)?;
        }
        Ok(())
    }

    fn bar_for(&self, run_id: Uuid, total: usize) -> ProgressBar {
        let mut current = self.current.lock();
        if let Some((id, bar)) = current.as_ref() {
            if *id == run_id {
                return bar.clone();
            }
            bar.abandon();
        }

        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("[{bar:30}] {pos}/{len} {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style.progress_chars("=>-"));

        *current = Some((run_id, bar.clone()));
        bar
    }

    fn take_bar(&self, run_id: Uuid) -> Option<ProgressBar> {
        let mut current = self.current.lock();
        match current.as_ref() {
            Some((id, _)) if *id == run_id => current.take().map(|(_, bar)| bar),
            _ => None,
        }
    }
}

impl PlaybackObserver for ConsoleSink {
    fn on_token(&self, run_id: Uuid, token: &ResolvedToken, position: usize, total: usize) {
        let bar = self.bar_for(run_id, total);
        let instruction = self.options.instruction_for(token);

        let line = match &instruction {
            RenderInstruction::Sign { asset: Some(path), .. } => {
                format!("  {}  [{}]", instruction, path.display())
            }
            _ => format!("  {}", instruction),
        };
        bar.println(line);
        bar.set_message(token.token.clone());
        bar.set_position(position as u64);
    }

    fn on_complete(&self, run_id: Uuid, _total: usize) {
        if let Some(bar) = self.take_bar(run_id) {
            bar.finish_with_message("done");
        }
    }

    fn on_stopped(&self, ack: &StopAck) {
        if let Some(bar) = ack.run_id.and_then(|id| self.take_bar(id)) {
            bar.abandon_with_message("stopped");
        }
    }
}

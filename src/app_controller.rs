use anyhow::{Context, Result};
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::Config;
use crate::playback::{PlaybackObserver, PlaybackSequencer, StartOutcome};
use crate::render::{ConsoleSink, RenderOptions};
use crate::speech::SpeechSource;
use crate::translator::{SignTranslator, Translation};

// @module: Application controller wiring speech, translation and playback

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Gloss conversion and sign resolution
    translator: SignTranslator,

    // @field: Terminal rendering sink, also registered with the sequencer
    sink: Arc<ConsoleSink>,

    // @field: Playback actor handle
    sequencer: PlaybackSequencer,
}

impl Controller {
    // @method: Create a controller with the given configuration
    // @requires: A running tokio runtime
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_observers(config, Vec::new())
    }

    /// Create a controller that also notifies `observers` during playback
    pub fn with_observers(config: Config, observers: Vec<Arc<dyn PlaybackObserver>>) -> Result<Self> {
        config.validate()?;

        let translator = match &config.vocabulary_path {
            Some(path) => SignTranslator::from_vocabulary_file(path)
                .with_context(|| format!("Failed to load vocabulary: {}", path.display()))?,
            None => SignTranslator::builtin(),
        }
        .with_resolution_cache(config.resolver.cache_enabled);

        let sink = Arc::new(ConsoleSink::new(RenderOptions::from_config(&config)));

        let mut all_observers: Vec<Arc<dyn PlaybackObserver>> = vec![sink.clone()];
        all_observers.extend(observers);
        let sequencer = PlaybackSequencer::spawn(config.playback.interval(), all_observers);

        debug!(
            "Controller ready (interval {} ms, mode {})",
            config.playback.interval_ms, config.preferences.sign_mode
        );

        Ok(Self {
            config,
            translator,
            sink,
            sequencer,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn translator(&self) -> &SignTranslator {
        &self.translator
    }

    pub fn sequencer(&self) -> &PlaybackSequencer {
        &self.sequencer
    }

    /// Translate without playing
    pub fn translate(&self, text: &str) -> Translation {
        self.translator.translate(text)
    }

    /// Translate an utterance and start playing it, replacing any current run
    ///
    /// Returns as soon as the first sign is shown. Playback is skipped when
    /// autoplay is off or nothing is left to sign.
    pub async fn begin(&self, text: &str) -> Result<Translation> {
        let translation = self.translator.translate(text);

        self.sequencer.reset().await?;
        self.sink.show_caption(text);

        if !self.config.playback.autoplay {
            self.sink.show_gloss(&translation.gloss);
            return Ok(translation);
        }

        match self.sequencer.start(translation.resolved.clone()).await? {
            StartOutcome::Started { total, .. } => {
                debug!("Playing {} signs for \"{}\"", total, text.trim());
            }
            StartOutcome::RejectedEmpty => info!("Nothing to sign for \"{}\"", text.trim()),
            StartOutcome::RejectedRunning => debug!("Playback still running, start ignored"),
        }

        Ok(translation)
    }

    /// Translate and play an utterance to the end
    pub async fn play(&self, text: &str) -> Result<Translation> {
        let translation = self.begin(text).await?;
        self.sequencer.wait_until_settled().await?;
        Ok(translation)
    }

    /// Play every utterance from `source`
    ///
    /// An utterance that arrives while the previous one is still playing
    /// interrupts it. Returns the number of utterances handled.
    pub async fn listen(&self, source: &mut dyn SpeechSource) -> Result<usize> {
        let mut handled = 0;
        let mut pending = source.next_utterance().await;

        while let Some(text) = pending.take() {
            handled += 1;
            self.begin(&text).await?;

            let interrupted = tokio::select! {
                next = source.next_utterance() => Some(next),
                settled = self.sequencer.wait_until_settled() => {
                    settled?;
                    None
                }
            };

            pending = match interrupted {
                Some(next) => next,
                None => source.next_utterance().await,
            };
        }

        self.sequencer.wait_until_settled().await?;
        info!("Speech source finished after {} utterances", handled);

        Ok(handled)
    }

    /// Cancel any playback in progress
    pub async fn stop(&self) -> Result<()> {
        self.sequencer.stop().await?;
        Ok(())
    }
}

/*!
 * Speech sources.
 *
 * Speech recognition happens outside this crate. A `SpeechSource` just hands
 * over already-recognized utterances, one at a time, until it runs dry.
 */

use std::collections::VecDeque;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

/// Supplier of recognized utterances
#[async_trait]
pub trait SpeechSource: Send {
    /// Next utterance, or `None` when the source is exhausted
    async fn next_utterance(&mut self) -> Option<String>;
}

/// Reads one utterance per line from an async reader
///
/// Blank lines are skipped.
pub struct LineSpeechSource<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> LineSpeechSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl LineSpeechSource<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> SpeechSource for LineSpeechSource<R> {
    async fn next_utterance(&mut self) -> Option<String> {
        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => {
                    debug!("Heard: {}", line.trim());
                    return Some(line.trim().to_string());
                }
                Ok(None) => return None,
                Err(e) => {
                    warn!("Speech input failed: {}", e);
                    return None;
                }
            }
        }
    }
}

/// Plays back a fixed list of utterances
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpeechSource {
    utterances: VecDeque<String>,
}

impl ScriptedSpeechSource {
    pub fn new<I, S>(utterances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            utterances: utterances.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.utterances.len()
    }
}

#[async_trait]
impl SpeechSource for ScriptedSpeechSource {
    async fn next_utterance(&mut self) -> Option<String> {
        self.utterances.pop_front()
    }
}

/*!
 * Timed playback of resolved sign tokens.
 *
 * `PlaybackMachine` holds the queue and cursor and performs the state
 * transitions. `PlaybackSequencer` owns a machine inside a tokio task, drives
 * its ticks on a fixed interval and serializes them with start, stop and reset
 * commands. Notifications go to `PlaybackObserver`s.
 *
 * ```text
 *   IDLE --start--> RUNNING --last token shown--> COMPLETE
 *     ^               |                              |
 *     +---stop/reset--+------------stop/reset--------+
 * ```
 */

use serde::Serialize;
use uuid::Uuid;

use crate::resolver::ResolvedToken;

pub mod machine;
pub mod observer;
pub mod sequencer;

pub use machine::PlaybackMachine;
pub use observer::{ChannelObserver, PlaybackObserver};
pub use sequencer::{PlaybackSequencer, DEFAULT_INTERVAL};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    #[default]
    Idle,
    Running,
    Complete,
}

/// Point-in-time view of a sequencer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaybackSnapshot {
    pub state: PlaybackState,
    pub run_id: Option<Uuid>,

    /// Number of tokens emitted in the current run
    pub cursor: usize,

    pub total: usize,
}

/// Notification produced by a playback run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    Token {
        run_id: Uuid,
        token: ResolvedToken,
        position: usize,
        total: usize,
    },
    Complete {
        run_id: Uuid,
        total: usize,
    },
    Stopped {
        run_id: Uuid,
        delivered: usize,
    },
}

impl PlaybackEvent {
    pub fn run_id(&self) -> Uuid {
        match self {
            PlaybackEvent::Token { run_id, .. }
            | PlaybackEvent::Complete { run_id, .. }
            | PlaybackEvent::Stopped { run_id, .. } => *run_id,
        }
    }
}

/// One step of a run, as produced by `PlaybackMachine::tick`
///
/// Cancellation is not a machine step, so it only appears in `PlaybackEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    Token {
        run_id: Uuid,
        token: ResolvedToken,
        position: usize,
        total: usize,
    },
    Complete {
        run_id: Uuid,
        total: usize,
    },
}

impl TickEvent {
    pub fn run_id(&self) -> Uuid {
        match self {
            TickEvent::Token { run_id, .. } | TickEvent::Complete { run_id, .. } => *run_id,
        }
    }
}

impl From<TickEvent> for PlaybackEvent {
    fn from(event: TickEvent) -> Self {
        match event {
            TickEvent::Token {
                run_id,
                token,
                position,
                total,
            } => PlaybackEvent::Token {
                run_id,
                token,
                position,
                total,
            },
            TickEvent::Complete { run_id, total } => PlaybackEvent::Complete { run_id, total },
        }
    }
}

/// Result of a start request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started { run_id: Uuid, total: usize },
    RejectedEmpty,
    RejectedRunning,
}

impl StartOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, StartOutcome::Started { .. })
    }
}

/// Acknowledgment of a stop or reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAck {
    /// Run that was cancelled or finished, if any
    pub run_id: Option<Uuid>,

    pub was_running: bool,

    /// Tokens emitted before the stop
    pub delivered: usize,
}

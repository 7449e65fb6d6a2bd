//! Synchronous playback state machine.
//!
//! The machine knows nothing about time. Whoever owns it calls `tick` once per
//! interval while it is running.

use uuid::Uuid;

use super::{PlaybackSnapshot, PlaybackState, StartOutcome, StopAck, TickEvent};
use crate::resolver::ResolvedToken;

/// Playback queue with a cursor pointing at the next token to emit
#[derive(Debug, Clone, Default)]
pub struct PlaybackMachine {
    queue: Vec<ResolvedToken>,
    cursor: usize,
    state: PlaybackState,
    run_id: Option<Uuid>,
}

impl PlaybackMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run over `queue`
    ///
    /// Rejected without touching the current state when the queue is empty or
    /// a run is in progress. Starting from COMPLETE or IDLE discards the
    /// previous queue and cursor.
    pub fn start(&mut self, queue: Vec<ResolvedToken>) -> StartOutcome {
        if self.state == PlaybackState::Running {
            return StartOutcome::RejectedRunning;
        }
        if queue.is_empty() {
            return StartOutcome::RejectedEmpty;
        }

        let run_id = Uuid::new_v4();
        let total = queue.len();

        self.queue = queue;
        self.cursor = 0;
        self.state = PlaybackState::Running;
        self.run_id = Some(run_id);

        StartOutcome::Started { run_id, total }
    }

    /// Advance by one step
    ///
    /// Emits the token under the cursor, or the completion event once every
    /// token has been emitted. Returns `None` when not running.
    pub fn tick(&mut self) -> Option<TickEvent> {
        if self.state != PlaybackState::Running {
            return None;
        }
        let run_id = self.run_id?;
        let total = self.queue.len();

        match self.queue.get(self.cursor) {
            Some(token) => {
                let token = token.clone();
                self.cursor += 1;
                Some(TickEvent::Token {
                    run_id,
                    token,
                    position: self.cursor,
                    total,
                })
            }
            None => {
                self.state = PlaybackState::Complete;
                Some(TickEvent::Complete { run_id, total })
            }
        }
    }

    /// Return to IDLE, keeping the queue for inspection
    pub fn stop(&mut self) -> StopAck {
        let ack = StopAck {
            run_id: self.run_id.take(),
            was_running: self.state == PlaybackState::Running,
            delivered: self.cursor,
        };

        self.cursor = 0;
        self.state = PlaybackState::Idle;
        ack
    }

    /// Return to IDLE and drop the queue
    pub fn reset(&mut self) -> StopAck {
        let ack = self.stop();
        self.queue.clear();
        ack
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn queue(&self) -> &[ResolvedToken] {
        &self.queue
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            state: self.state,
            run_id: self.run_id,
            cursor: self.cursor,
            total: self.queue.len(),
        }
    }
}

//! Playback notification sinks.

use tokio::sync::mpsc;
use uuid::Uuid;

use super::{PlaybackEvent, StopAck, TickEvent};
use crate::resolver::ResolvedToken;

/// Receives playback notifications from the sequencer task
///
/// Calls happen on the sequencer task in run order, so implementations should
/// return quickly.
pub trait PlaybackObserver: Send + Sync {
    /// A token became current; `position` is 1-based
    fn on_token(&self, run_id: Uuid, token: &ResolvedToken, position: usize, total: usize);

    /// The run finished after showing every token
    fn on_complete(&self, run_id: Uuid, total: usize);

    /// A running sequence was cancelled
    fn on_stopped(&self, _ack: &StopAck) {}
}

/// Forwards every notification into an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<PlaybackEvent>,
}

impl ChannelObserver {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PlaybackEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn forward(&self, event: PlaybackEvent) {
        // A dropped receiver just means nobody is listening any more
        let _ = self.sender.send(event);
    }
}

impl PlaybackObserver for ChannelObserver {
    fn on_token(&self, run_id: Uuid, token: &ResolvedToken, position: usize, total: usize) {
        self.forward(PlaybackEvent::Token {
            run_id,
            token: token.clone(),
            position,
            total,
        });
    }

    fn on_complete(&self, run_id: Uuid, total: usize) {
        self.forward(PlaybackEvent::Complete { run_id, total });
    }

    fn on_stopped(&self, ack: &StopAck) {
        if let Some(run_id) = ack.run_id {
            self.forward(PlaybackEvent::Stopped {
                run_id,
                delivered: ack.delivered,
            });
        }
    }
}

/// Calls an observer for one machine step
pub(crate) fn dispatch(observer: &dyn PlaybackObserver, event: &TickEvent) {
    match event {
        TickEvent::Token {
            run_id,
            token,
            position,
            total,
        } => observer.on_token(*run_id, token, *position, *total),
        TickEvent::Complete { run_id, total } => observer.on_complete(*run_id, *total),
    }
}

/*!
 * Tokio actor that plays a resolved token queue on a fixed interval.
 *
 * The actor task is the only owner of the `PlaybackMachine`. Commands arrive
 * over an mpsc channel and are always handled before a tick that is due at the
 * same moment. The pending tick is a single deadline that stop and reset clear
 * before they reply, and observers are invoked from the actor task itself, so
 * once `stop().await` returns no further notification of that run can arrive.
 */

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{sleep_until, Instant};

use super::observer::dispatch;
use super::{
    PlaybackMachine, PlaybackObserver, PlaybackSnapshot, PlaybackState, StartOutcome, StopAck,
    TickEvent,
};
use crate::errors::PlaybackError;
use crate::resolver::ResolvedToken;

/// Time each token stays on screen
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

const COMMAND_BUFFER: usize = 32;

enum Command {
    Start {
        queue: Vec<ResolvedToken>,
        reply: oneshot::Sender<StartOutcome>,
    },
    Stop {
        reply: oneshot::Sender<StopAck>,
    },
    Reset {
        reply: oneshot::Sender<StopAck>,
    },
}

/// Handle to a running playback actor
///
/// Cloning the handle shares the same actor. The actor exits once every handle
/// has been dropped.
#[derive(Clone)]
pub struct PlaybackSequencer {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<PlaybackSnapshot>,
    interval: Duration,
}

impl PlaybackSequencer {
    /// Spawn the actor on the current tokio runtime
    ///
    /// # Arguments
    /// * `interval` - Time between consecutive tokens
    /// * `observers` - Notified of every token, completion and cancellation
    pub fn spawn(interval: Duration, observers: Vec<Arc<dyn PlaybackObserver>>) -> Self {
        let (commands, receiver) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshots) = watch::channel(PlaybackSnapshot::default());

        let actor = SequencerActor {
            machine: PlaybackMachine::new(),
            observers,
            snapshots: snapshot_tx,
            interval,
            next_tick: None,
        };
        tokio::spawn(actor.run(receiver));

        Self {
            commands,
            snapshots,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start playing `queue`; the first token is emitted before this returns
    pub async fn start(&self, queue: Vec<ResolvedToken>) -> Result<StartOutcome, PlaybackError> {
        self.request(|reply| Command::Start { queue, reply }).await
    }

    /// Cancel the current run and return to IDLE
    pub async fn stop(&self) -> Result<StopAck, PlaybackError> {
        self.request(|reply| Command::Stop { reply }).await
    }

    /// Cancel the current run and clear the queue
    pub async fn reset(&self) -> Result<StopAck, PlaybackError> {
        self.request(|reply| Command::Reset { reply }).await
    }

    /// Latest published state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Wait until the sequencer is no longer RUNNING
    pub async fn wait_until_settled(&self) -> Result<PlaybackSnapshot, PlaybackError> {
        let mut snapshots = self.snapshots.clone();
        let settled = snapshots
            .wait_for(|s| s.state != PlaybackState::Running)
            .await
            .map_err(|_| PlaybackError::Closed)?;
        Ok(settled.clone())
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, PlaybackError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| PlaybackError::Closed)?;
        response.await.map_err(|_| PlaybackError::Closed)
    }
}

impl std::fmt::Debug for PlaybackSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSequencer")
            .field("interval", &self.interval)
            .field("snapshot", &*self.snapshots.borrow())
            .finish()
    }
}

struct SequencerActor {
    machine: PlaybackMachine,
    observers: Vec<Arc<dyn PlaybackObserver>>,
    snapshots: watch::Sender<PlaybackSnapshot>,
    interval: Duration,
    next_tick: Option<Instant>,
}

impl SequencerActor {
    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        loop {
            let deadline = self.next_tick;
            let due = async move {
                match deadline {
                    Some(at) => sleep_until(at).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                biased;

                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                _ = due => self.advance(),
            }
        }

        debug!("Playback sequencer shut down");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Start { queue, reply } => {
                let outcome = self.machine.start(queue);
                match outcome {
                    StartOutcome::Started { run_id, total } => {
                        info!("Playback run {} started with {} tokens", run_id, total);
                        self.advance();
                    }
                    StartOutcome::RejectedEmpty => debug!("Ignoring start with an empty queue"),
                    StartOutcome::RejectedRunning => debug!("Ignoring start while already running"),
                }
                let _ = reply.send(outcome);
            }
            Command::Stop { reply } => {
                let ack = self.machine.stop();
                self.finish_stop(&ack);
                let _ = reply.send(ack);
            }
            Command::Reset { reply } => {
                let ack = self.machine.reset();
                self.finish_stop(&ack);
                let _ = reply.send(ack);
            }
        }
    }

    /// Emit one machine step and schedule the next
    ///
    /// Each deadline is one interval after the previous one, so a late wake-up
    /// does not push back the rest of the run. The first step of a run has no
    /// previous deadline and counts from now.
    fn advance(&mut self) {
        let previous = self.next_tick.take();

        if let Some(event) = self.machine.tick() {
            match &event {
                TickEvent::Token { position, total, token, .. } => {
                    debug!("Playing {}/{}: {}", position, total, token.token);
                }
                TickEvent::Complete { run_id, total } => {
                    info!("Playback run {} complete ({} tokens)", run_id, total);
                }
            }
            self.notify(&event);
        }

        if self.machine.is_running() {
            self.next_tick = Some(previous.unwrap_or_else(Instant::now) + self.interval);
        }
        self.publish();
    }

    fn finish_stop(&mut self, ack: &StopAck) {
        self.next_tick = None;

        if ack.was_running {
            if let Some(run_id) = ack.run_id {
                info!("Playback run {} stopped after {} tokens", run_id, ack.delivered);
            }
            for observer in &self.observers {
                observer.on_stopped(ack);
            }
        }
        self.publish();
    }

    fn notify(&self, event: &TickEvent) {
        for observer in &self.observers {
            dispatch(observer.as_ref(), event);
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.machine.snapshot());
    }
}

//! Background task that drives one training session

use chrono::{DateTime, Utc};
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};
use tracing::{error, info, warn};

use crate::{
    engine::{Notifier, RoundTimer, SoundPlayer, TimerConfig},
    error::TimerError,
    state::TimerState,
    utils::Locale,
};

use super::TokioScheduler;

/// Owner's side of a running session.
///
/// Dropping the handle stops the session and cancels its pending tick.
#[derive(Debug)]
pub struct SessionHandle {
    config: TimerConfig,
    started_at: DateTime<Utc>,
    stop_tx: Option<oneshot::Sender<()>>,
    snapshot_rx: watch::Receiver<TimerState>,
    task: JoinHandle<()>,
}

/// Validate `config`, start a timer and spawn the task that feeds it ticks
pub fn spawn_session<P, N>(
    config: TimerConfig,
    sound: P,
    notifier: N,
    locale: Locale,
) -> Result<SessionHandle, TimerError>
where
    P: SoundPlayer + 'static,
    N: Notifier + 'static,
{
    let (tick_tx, tick_rx) = mpsc::unbounded_channel();
    let timer = RoundTimer::start(config, sound, notifier, TokioScheduler::new(tick_tx))?
        .with_locale(locale);

    let (snapshot_tx, snapshot_rx) = watch::channel(timer.state());
    let (stop_tx, stop_rx) = oneshot::channel();
    let task = tokio::spawn(session_task(timer, tick_rx, stop_rx, snapshot_tx));

    Ok(SessionHandle {
        config,
        started_at: Utc::now(),
        stop_tx: Some(stop_tx),
        snapshot_rx,
        task,
    })
}

async fn session_task<P, N>(
    mut timer: RoundTimer<P, N, TokioScheduler>,
    mut tick_rx: mpsc::UnboundedReceiver<()>,
    mut stop_rx: oneshot::Receiver<()>,
    snapshot_tx: watch::Sender<TimerState>,
) where
    P: SoundPlayer,
    N: Notifier,
{
    info!("Starting session task");

    loop {
        tokio::select! {
            biased;

            // Fires on an explicit stop and when the handle is dropped
            _ = &mut stop_rx => {
                timer.stop();
                break;
            }

            tick = tick_rx.recv() => match tick {
                Some(()) => {
                    let state = timer.on_tick();
                    snapshot_tx.send_replace(state);
                    if state.is_finished() {
                        info!("Session finished after {} rounds", state.completed_rounds);
                        break;
                    }
                }
                None => {
                    warn!("Tick channel closed, stopping session");
                    timer.stop();
                    break;
                }
            }
        }
    }
}

impl SessionHandle {
    /// Ask the session to stop. Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            // Send fails only if the task already ended on its own
            let _ = stop_tx.send(());
        }
    }

    /// Wait until the session task has exited
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            error!("Session task failed: {}", e);
        }
    }

    /// Wait for the finished signal, or for the session to end early.
    /// Returns the last published snapshot either way.
    pub async fn wait_finished(&mut self) -> TimerState {
        let finished = self.snapshot_rx
            .wait_for(|state| state.is_finished())
            .await
            .map(|state| *state);

        match finished {
            Ok(state) => state,
            Err(_) => *self.snapshot_rx.borrow(),
        }
    }

    pub fn snapshot(&self) -> TimerState {
        *self.snapshot_rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.snapshot_rx.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.snapshot().is_finished()
    }

    /// Whether the session is still counting down. False as soon as
    /// `stop` is called, even before the task has exited.
    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some() && !self.task.is_finished()
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

//! Tokio-backed single-shot tick scheduler

use std::time::Duration;

use tokio::{sync::mpsc, task::AbortHandle, time::sleep};

use crate::engine::Scheduler;

/// Length of one timer tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Schedules each tick as a sleeping task that posts to the session channel.
///
/// The handle is the task's abort handle, so cancelling a pending tick
/// guarantees it never reaches the channel.
#[derive(Debug)]
pub struct TokioScheduler {
    period: Duration,
    tick_tx: mpsc::UnboundedSender<()>,
}

impl TokioScheduler {
    pub fn new(tick_tx: mpsc::UnboundedSender<()>) -> Self {
        Self::with_period(tick_tx, TICK_PERIOD)
    }

    pub fn with_period(tick_tx: mpsc::UnboundedSender<()>, period: Duration) -> Self {
        Self { period, tick_tx }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = AbortHandle;

    fn schedule_tick(&mut self) -> AbortHandle {
        let tick_tx = self.tick_tx.clone();
        let period = self.period;
        tokio::spawn(async move {
            sleep(period).await;
            // Receiver gone means the session already ended
            let _ = tick_tx.send(());
        })
        .abort_handle()
    }

    fn cancel_tick(&mut self, handle: AbortHandle) {
        handle.abort();
    }
}

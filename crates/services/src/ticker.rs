//! Cancellable one-second tick source for the drill countdown.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::drill::DrillEvent;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owns at most one running tick task.
///
/// Starting while already running replaces the old task, so two tick
/// sources never coexist. Dropping the ticker cancels the task.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period, task: None }
    }

    /// Emit `DrillEvent::Tick { epoch }` every period, first one a full period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, epoch: u64, events: UnboundedSender<DrillEvent>) {
        self.stop();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(DrillEvent::Tick { epoch }).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(epoch, "countdown ticker started");
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("countdown ticker stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::default();
        ticker.start(7, tx);

        let started = Instant::now();
        for _ in 0..3 {
            assert!(matches!(rx.recv().await, Some(DrillEvent::Tick { epoch: 7 })));
        }
        assert_eq!(started.elapsed(), Duration::from_secs(3));
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_previous_source() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::default();
        ticker.start(1, tx.clone());
        ticker.start(2, tx);

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        let mut epochs = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let DrillEvent::Tick { epoch } = event {
                epochs.push(epoch);
            }
        }
        assert_eq!(epochs, vec![2, 2, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::default();
        ticker.start(1, tx);
        ticker.stop();
        assert!(!ticker.is_running());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}

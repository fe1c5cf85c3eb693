//! Cooperative pause/stop flags shared between controller and worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use crate::traits::RunObserver;

/// Bounded wait between pause-flag checks; a missed wakeup can delay resume
/// by at most this long.
const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Shared pause/stop state of one run.
///
/// The controller side writes the flags; the worker reads them at record
/// boundaries only. Cloning shares the same underlying state.
#[derive(Clone, Default)]
pub struct RunControl {
    inner: Arc<ControlState>,
}

#[derive(Default)]
struct ControlState {
    paused: AtomicBool,
    stopped: AtomicBool,
    wake: Notify,
}

impl RunControl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a pause at the next record boundary.
    pub fn pause(&self) {
        self.inner.paused.store(true, Ordering::SeqCst);
    }

    /// Clears the pause flag and wakes a waiting worker.
    pub fn resume(&self) {
        self.inner.paused.store(false, Ordering::SeqCst);
        self.inner.wake.notify_waiters();
    }

    /// Requests an early stop at the next record boundary. In-flight work
    /// for the current record completes first.
    pub fn stop(&self) {
        self.inner.stopped.store(true, Ordering::SeqCst);
        // Wake a paused worker so it can observe the stop.
        self.inner.wake.notify_waiters();
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.inner.paused.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.inner.stopped.load(Ordering::SeqCst)
    }

    /// Worker-side wait at a record boundary: blocks while paused without
    /// spinning, acknowledging the pause once and the resume once.
    pub(crate) async fn wait_while_paused(&self, observer: &dyn RunObserver) {
        if !self.is_paused() {
            return;
        }
        observer.on_paused();
        while self.is_paused() && !self.is_stopped() {
            let _ = tokio::time::timeout(PAUSE_POLL_INTERVAL, self.inner.wake.notified()).await;
        }
        if !self.is_stopped() {
            observer.on_resumed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NoopObserver;

    #[test]
    fn flags_default_clear() {
        let control = RunControl::new();
        assert!(!control.is_paused());
        assert!(!control.is_stopped());
    }

    #[test]
    fn clones_share_state() {
        let control = RunControl::new();
        let clone = control.clone();
        control.pause();
        assert!(clone.is_paused());
        clone.resume();
        assert!(!control.is_paused());
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_not_paused() {
        let control = RunControl::new();
        control.wait_while_paused(&NoopObserver).await;
    }

    #[tokio::test]
    async fn resume_wakes_waiting_worker() {
        let control = RunControl::new();
        control.pause();
        let worker = control.clone();
        let waiter = tokio::spawn(async move {
            worker.wait_while_paused(&NoopObserver).await;
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        control.resume();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("worker should wake on resume")
            .expect("worker task should not panic");
    }

    #[tokio::test]
    async fn stop_wakes_paused_worker() {
        let control = RunControl::new();
        control.pause();
        let worker = control.clone();
        let waiter = tokio::spawn(async move {
            worker.wait_while_paused(&NoopObserver).await;
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        control.stop();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("worker should wake on stop")
            .expect("worker task should not panic");
        assert!(control.is_stopped());
    }
}

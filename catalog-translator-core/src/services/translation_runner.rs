//! Run orchestration: one worker task per run, cooperative control.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::services::{RunControl, ServiceContext, TranslationRunService};
use crate::traits::RunObserver;
use crate::types::{RunReport, RunRequest};

/// Handle to a translation run executing on a dedicated tokio task.
///
/// Long-running translation calls never block the caller: the worker owns
/// the document and reports back through the observer. Pause/resume/stop
/// are cooperative and take effect at record boundaries.
pub struct TranslationRunner {
    control: RunControl,
    handle: JoinHandle<RunReport>,
}

impl TranslationRunner {
    /// Spawns the worker task for `request`.
    ///
    /// The observer receives progress, field labels, sample batches, pause
    /// acknowledgements, and exactly one terminal report.
    pub fn spawn(
        ctx: Arc<ServiceContext>,
        request: RunRequest,
        observer: Arc<dyn RunObserver>,
    ) -> Self {
        let control = RunControl::new();
        let worker_control = control.clone();
        let handle = tokio::spawn(async move {
            let service = TranslationRunService::new(ctx);
            let result = service
                .run(&request, &worker_control, observer.as_ref())
                .await;
            if let Err(e) = &result {
                if e.is_expected() {
                    log::warn!("translation run failed: {e}");
                } else {
                    log::error!("translation run failed: {e}");
                }
            }
            let report = RunReport::from_result(result);
            observer.on_finished(&report);
            report
        });
        Self { control, handle }
    }

    /// Requests a pause at the next record boundary.
    pub fn pause(&self) {
        self.control.pause();
    }

    /// Clears the pause flag; the worker resumes promptly.
    pub fn resume(&self) {
        self.control.resume();
    }

    /// Requests an early stop; the current record finishes first.
    pub fn stop(&self) {
        self.control.stop();
    }

    /// A clone of the run's control flags, for wiring into signal handlers.
    #[must_use]
    pub fn control(&self) -> RunControl {
        self.control.clone()
    }

    /// Awaits the worker and returns its terminal report.
    pub async fn join(self) -> RunReport {
        match self.handle.await {
            Ok(report) => report,
            Err(e) => RunReport::Error {
                message: format!("Error: translation worker failed: {e}"),
            },
        }
    }
}

//! Abstraction seams implemented by the platform layer.

use crate::types::{RunReport, TranslationSample};

/// Presentation boundary of a translation run.
///
/// The worker owns the document tree for the whole run; an observer only
/// ever receives immutable snapshots. Implementations must not block, since
/// the worker calls these inline between translation calls.
///
/// All methods default to no-ops so frontends implement only what they
/// display.
pub trait RunObserver: Send + Sync {
    /// Record-level progress: `current` of `total`, with a display label.
    fn on_progress(&self, _current: usize, _total: usize, _label: &str) {}

    /// The locator currently being translated.
    fn on_field(&self, _label: &str) {}

    /// Preview batch for one of the leading records, emitted before that
    /// record is mutated. May be empty when no sampled field carried text.
    fn on_samples(&self, _samples: &[TranslationSample]) {}

    /// The worker acknowledged a pause at a record boundary.
    fn on_paused(&self) {}

    /// The worker resumed after a pause.
    fn on_resumed(&self) {}

    /// Terminal report; delivered exactly once per spawned run.
    fn on_finished(&self, _report: &RunReport) {}
}

/// Observer that ignores every notification.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

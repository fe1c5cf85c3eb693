//! Business-logic service layer.

mod field_detection_service;
mod run_control;
mod translation_run_service;
mod translation_runner;

pub use field_detection_service::FieldDetectionService;
pub use run_control::RunControl;
pub use translation_run_service::{is_code_like, TranslationRunService};
pub use translation_runner::TranslationRunner;

use std::sync::Arc;

use catalog_translator_provider::TranslationProvider;

use crate::types::RunOptions;

/// Service context holding the injected dependencies of a run.
///
/// The platform layer creates this context with a concrete translation
/// provider; the services only ever see the trait object.
pub struct ServiceContext {
    /// Translation backend.
    pub provider: Arc<dyn TranslationProvider>,
    /// Mapping-pass tunables.
    pub options: RunOptions,
}

impl ServiceContext {
    /// Context with default options.
    #[must_use]
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            provider,
            options: RunOptions::default(),
        }
    }

    /// Context with explicit options.
    #[must_use]
    pub fn with_options(provider: Arc<dyn TranslationProvider>, options: RunOptions) -> Self {
        Self { provider, options }
    }
}

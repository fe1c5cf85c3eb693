//! Translation-run request, option, and outcome types.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use catalog_translator_provider::LanguagePair;

use crate::error::CoreResult;
use crate::types::FieldDescriptor;

/// One preview triple from an early record of a run.
///
/// Ephemeral: shown to a human, never written to the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSample {
    /// Display name of the sampled field.
    pub field_name: String,
    /// Text before mutation.
    pub original_text: String,
    /// The translation the pass applies for this occurrence.
    pub translated_text: String,
}

/// Everything one translation run needs.
///
/// Deduplicating `fields` by locator is the caller's responsibility; the
/// pass processes the list as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    /// Source XML document.
    pub input_path: PathBuf,
    /// Destination for the translated copy.
    pub output_path: PathBuf,
    /// Selected fields, in processing order.
    pub fields: Vec<FieldDescriptor>,
    /// Source/target language pair.
    pub languages: LanguagePair,
}

/// Tunables of the mapping pass.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Delay between records, throttling backend load. Zero disables
    /// pacing.
    pub record_pacing: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            record_pacing: Duration::from_millis(300),
        }
    }
}

/// How a run ended, short of a run-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every record was processed and the output document written.
    Completed {
        /// Number of records processed.
        records: usize,
    },
    /// The stop flag ended the run early; no output document was written.
    Stopped {
        /// Records fully processed before the stop took effect.
        records_completed: usize,
    },
}

/// Terminal report delivered to the presentation layer: success, stopped by
/// user, or error. Exactly one is produced per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RunReport {
    /// The run completed and the output document exists.
    Success {
        message: String,
        records: usize,
    },
    /// The user stopped the run; not a success, not an error.
    Stopped {
        message: String,
        records_completed: usize,
    },
    /// A run-level failure aborted the run.
    Error {
        message: String,
    },
}

impl RunReport {
    /// Folds the worker result into the three-way terminal report.
    #[must_use]
    pub fn from_result(result: CoreResult<RunOutcome>) -> Self {
        match result {
            Ok(RunOutcome::Completed { records }) => Self::Success {
                message: format!("Translated {records} products"),
                records,
            },
            Ok(RunOutcome::Stopped { records_completed }) => Self::Stopped {
                message: "Translation stopped by user".to_string(),
                records_completed,
            },
            Err(e) => Self::Error {
                message: format!("Error: {e}"),
            },
        }
    }

    /// The human-readable message of any report kind.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. }
            | Self::Stopped { message, .. }
            | Self::Error { message } => message,
        }
    }
}

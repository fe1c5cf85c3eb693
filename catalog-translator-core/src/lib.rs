//! Catalog Translator Core Library
//!
//! Core logic for translating product-catalog XML documents:
//! - Field detection (`FieldDetectionService`): inspect the first record,
//!   list translatable fields
//! - Translation pass (`TranslationRunService`): walk every record,
//!   substitute translated text in place, serialize the copy
//! - Run orchestration (`TranslationRunner`): a dedicated worker task with
//!   cooperative pause/stop and progress reporting
//!
//! This library is platform-independent: the translation backend is
//! injected as a trait object and the presentation layer hangs off the
//! [`RunObserver`] trait.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod xml;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    is_code_like, FieldDetectionService, RunControl, ServiceContext, TranslationRunService,
    TranslationRunner,
};
pub use traits::{NoopObserver, RunObserver};

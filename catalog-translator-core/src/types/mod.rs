//! Type definitions.

mod field;
mod run;

pub use field::{FieldDescriptor, FieldLocator, ATTRIBUTE_TAG, CATEGORY_TAG, RECORD_TAG};
pub use run::{RunOptions, RunOutcome, RunReport, RunRequest, TranslationSample};

// Re-export the provider library's public types
pub use catalog_translator_provider::{
    LanguagePair, ProviderCredentials, ProviderMetadata, ProviderType, AUTO_SOURCE,
};

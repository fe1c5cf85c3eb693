//! Provider factory functions and metadata.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::TranslationProvider;
use crate::types::{ProviderCredentials, ProviderMetadata};

#[cfg(feature = "deepl")]
use crate::providers::DeeplProvider;
#[cfg(feature = "google")]
use crate::providers::GoogleProvider;

/// Creates a [`TranslationProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`]
/// variant. The returned provider is wrapped in `Arc<dyn TranslationProvider>`
/// for easy sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use catalog_translator_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::Deepl {
///     api_key: "your-key".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn TranslationProvider>> {
    match credentials {
        #[cfg(feature = "google")]
        ProviderCredentials::Google {} => Ok(Arc::new(GoogleProvider::new())),
        #[cfg(feature = "deepl")]
        ProviderCredentials::Deepl { api_key } => Ok(Arc::new(DeeplProvider::new(api_key))),
    }
}

/// Returns metadata for all providers enabled via feature flags.
///
/// Useful for building dynamic UIs that enumerate available providers
/// and their required credential fields.
pub fn get_all_provider_metadata() -> Vec<ProviderMetadata> {
    vec![
        #[cfg(feature = "google")]
        GoogleProvider::metadata(),
        #[cfg(feature = "deepl")]
        DeeplProvider::metadata(),
    ]
}

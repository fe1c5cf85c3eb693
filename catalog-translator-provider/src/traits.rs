use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{LanguagePair, ProviderMetadata};

/// Raw API error (internal use).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code (format differs per provider; HTTP status for REST APIs).
    pub code: Option<String>,
    /// Raw error message.
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra context available when mapping an error (internal use).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Language code involved in the failed request, for `UnsupportedLanguage`.
    pub language: Option<String>,
}

/// Provider error mapping trait (internal use).
///
/// Each provider implements this to map its raw API errors to the unified
/// error type.
pub(crate) trait ProviderErrorMapper {
    /// Returns the provider identifier.
    fn provider_name(&self) -> &'static str;

    /// Maps a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: parse error.
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unknown error (fallback).
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Translation provider trait.
///
/// The one capability the core depends on: an opaque, potentially-failing,
/// rate-sensitive remote call that turns text in one language into text in
/// another. Implementations must be cheap to share (`Arc<dyn ...>`) across
/// tasks.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Provider metadata (type level).
    ///
    /// Returns the provider's name, description, and credential fields.
    /// Does not need an instance; callable before the provider is created.
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// Checks whether the configured credentials are accepted by the remote
    /// API. Returns `Ok(false)` for rejected credentials; `Err` is reserved
    /// for failures that say nothing about credential validity.
    async fn validate_credentials(&self) -> Result<bool>;

    /// Translates `text` for the given language pair.
    ///
    /// The call is issued exactly once; no retry, no batching. Callers own
    /// the fallback policy for failures.
    async fn translate(&self, text: &str, languages: &LanguagePair) -> Result<String>;
}

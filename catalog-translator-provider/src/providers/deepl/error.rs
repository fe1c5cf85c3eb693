//! DeepL error mapping.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::DeeplProvider;

impl ProviderErrorMapper for DeeplProvider {
    fn provider_name(&self) -> &'static str {
        "deepl"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some("401") | Some("403") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            // DeepL's dedicated "character limit reached" status.
            Some("456") => ProviderError::QuotaExceeded {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            Some("400") if raw.message.to_lowercase().contains("lang") => {
                ProviderError::UnsupportedLanguage {
                    provider: self.provider_name().to_string(),
                    language: context.language.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }
            _ => self.unknown_error(raw),
        }
    }
}

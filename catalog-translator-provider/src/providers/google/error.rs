//! Google error mapping.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::GoogleProvider;

impl ProviderErrorMapper for GoogleProvider {
    fn provider_name(&self) -> &'static str {
        "google"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // The gtx endpoint answers 400 for unknown language codes.
            Some("400") => ProviderError::UnsupportedLanguage {
                provider: self.provider_name().to_string(),
                language: context.language.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            // 403 shows up when the endpoint throttles an origin.
            Some("403") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_bad_request_to_unsupported_language() {
        let provider = GoogleProvider::new();
        let err = provider.map_error(
            RawApiError::with_code("400", "bad sl"),
            ErrorContext {
                language: Some("xx".to_string()),
            },
        );
        assert!(matches!(
            err,
            ProviderError::UnsupportedLanguage { language, .. } if language == "xx"
        ));
    }

    #[test]
    fn unmapped_status_falls_back_to_unknown() {
        let provider = GoogleProvider::new();
        let err = provider.map_error(
            RawApiError::with_code("418", "teapot"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::Unknown { .. }));
    }
}

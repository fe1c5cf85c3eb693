//! Google `TranslationProvider` trait implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::traits::{ProviderErrorMapper, TranslationProvider};
use crate::types::{LanguagePair, ProviderMetadata};

use super::GoogleProvider;

impl GoogleProvider {
    /// Concatenates the translated segments from the gtx response.
    ///
    /// Response shape: `[[["Salut","Hello",...],["lume","world",...]], ...]`.
    pub(crate) fn collect_segments(body: &Value) -> String {
        let mut translated = String::new();
        if let Some(segments) = body.get(0).and_then(Value::as_array) {
            for segment in segments {
                if let Some(text) = segment.get(0).and_then(Value::as_str) {
                    translated.push_str(text);
                }
            }
        }
        translated
    }
}

#[async_trait]
impl TranslationProvider for GoogleProvider {
    fn id(&self) -> &'static str {
        "google"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: "google".to_string(),
            name: "Google Translate".to_string(),
            description: "Unofficial Google Translate web endpoint (no API key)".to_string(),
            required_fields: vec![],
            supports_auto_detect: true,
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        // No credentials exist; probe the endpoint with a one-word request.
        let probe = LanguagePair::new("en", "es");
        match self.translate("hello", &probe).await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    async fn translate(&self, text: &str, languages: &LanguagePair) -> Result<String> {
        let body = self.fetch_translation(text, languages).await?;
        let translated = Self::collect_segments(&body);

        if translated.is_empty() {
            return Err(ProviderError::EmptyTranslation {
                provider: self.provider_name().to_string(),
            });
        }
        Ok(translated)
    }
}

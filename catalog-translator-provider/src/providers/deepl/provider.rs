//! DeepL `TranslationProvider` trait implementation.

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{ErrorContext, ProviderErrorMapper, TranslationProvider};
use crate::types::{FieldType, LanguagePair, ProviderCredentialField, ProviderMetadata};

use super::{DeeplProvider, DeeplTranslateResponse, DeeplUsageResponse};

impl DeeplProvider {
    /// DeepL expects uppercase language codes (`EN`, `RO`).
    pub(crate) fn deepl_lang_code(code: &str) -> String {
        code.trim().to_ascii_uppercase()
    }
}

#[async_trait]
impl TranslationProvider for DeeplProvider {
    fn id(&self) -> &'static str {
        "deepl"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: "deepl".to_string(),
            name: "DeepL".to_string(),
            description: "DeepL REST API v2 (free tier endpoint)".to_string(),
            required_fields: vec![ProviderCredentialField {
                key: "apiKey".to_string(),
                label: "API Key".to_string(),
                field_type: FieldType::Password,
            }],
            supports_auto_detect: true,
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self.get::<DeeplUsageResponse>("/usage").await {
            Ok(usage) => {
                log::debug!(
                    "[deepl] usage {}/{} characters",
                    usage.character_count,
                    usage.character_limit
                );
                Ok(true)
            }
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn translate(&self, text: &str, languages: &LanguagePair) -> Result<String> {
        let mut form: Vec<(&str, String)> = vec![
            ("text", text.to_string()),
            ("target_lang", Self::deepl_lang_code(&languages.target)),
        ];
        // Omitting source_lang asks DeepL to detect the language.
        if !languages.source_is_auto() {
            form.push(("source_lang", Self::deepl_lang_code(&languages.source)));
        }

        let context = ErrorContext {
            language: Some(languages.target.clone()),
        };
        let response: DeeplTranslateResponse = self.post_form("/translate", &form, context).await?;

        match response.translations.into_iter().next() {
            Some(translation) if !translation.text.is_empty() => Ok(translation.text),
            _ => Err(ProviderError::EmptyTranslation {
                provider: self.provider_name().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_codes_are_uppercased() {
        assert_eq!(DeeplProvider::deepl_lang_code("ro"), "RO");
        assert_eq!(DeeplProvider::deepl_lang_code(" en "), "EN");
    }

    #[test]
    fn metadata_requires_api_key() {
        let meta = DeeplProvider::metadata();
        assert_eq!(meta.required_fields.len(), 1);
        assert_eq!(meta.required_fields[0].key, "apiKey");
        assert_eq!(meta.required_fields[0].field_type, FieldType::Password);
    }
}

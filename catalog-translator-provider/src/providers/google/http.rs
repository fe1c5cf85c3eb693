//! Google Translate HTTP request methods.

use serde_json::Value;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::LanguagePair;

use super::{GoogleProvider, GOOGLE_API_BASE, GOOGLE_USER_AGENT};

impl GoogleProvider {
    /// Executes a translation GET request and returns the parsed JSON body.
    ///
    /// The endpoint answers with a nested array: element 0 is a list of
    /// segments, each segment carrying the translated text at index 0.
    pub(crate) async fn fetch_translation(
        &self,
        text: &str,
        languages: &LanguagePair,
    ) -> Result<Value> {
        let source = if languages.source_is_auto() {
            "auto".to_string()
        } else {
            crate::providers::common::normalize_lang_code(&languages.source)
        };
        let target = crate::providers::common::normalize_lang_code(&languages.target);

        let url = format!(
            "{GOOGLE_API_BASE}?client=gtx&sl={source}&tl={target}&dt=t&q={}",
            urlencoding::encode(text)
        );

        let request = self
            .client
            .get(&url)
            .header("User-Agent", GOOGLE_USER_AGENT);

        let (status, body) = HttpUtils::execute_request(
            request,
            self.provider_name(),
            "GET",
            "translate_a/single",
        )
        .await?;

        if !(200..300).contains(&status) {
            return Err(self.map_error(
                RawApiError::with_code(status.to_string(), body),
                ErrorContext {
                    language: Some(target),
                },
            ));
        }

        HttpUtils::parse_json(&body, self.provider_name())
    }
}

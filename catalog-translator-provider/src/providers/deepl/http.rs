//! DeepL HTTP request methods.

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::types::DeeplErrorResponse;
use super::{DeeplProvider, DEEPL_API_BASE};

impl DeeplProvider {
    /// Executes a form-encoded POST request.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, String)],
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{DEEPL_API_BASE}{path}");

        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(form);

        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", path).await?;

        if !(200..300).contains(&status) {
            return Err(self.map_error(
                RawApiError::with_code(status.to_string(), Self::error_message(&body)),
                context,
            ));
        }

        HttpUtils::parse_json(&body, self.provider_name())
    }

    /// Executes a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{DEEPL_API_BASE}{path}");

        let request = self
            .client
            .get(&url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key));

        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", path).await?;

        if !(200..300).contains(&status) {
            return Err(self.map_error(
                RawApiError::with_code(status.to_string(), Self::error_message(&body)),
                ErrorContext::default(),
            ));
        }

        HttpUtils::parse_json(&body, self.provider_name())
    }

    /// Pulls the `message` field out of a DeepL error body, falling back to
    /// the raw body.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<DeeplErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| body.to_string())
    }
}

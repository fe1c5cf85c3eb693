//! Generic HTTP request execution.
//!
//! Providers keep their own URL building, authentication, and response
//! parsing; the shared part is sending the request, classifying transport
//! failures, and logging. There is deliberately no retry here: a
//! translation call fails once and the caller decides what to do with the
//! text.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP helper function set.
pub struct HttpUtils;

impl HttpUtils {
    /// Sends a prepared request and returns `(status, body)`.
    ///
    /// Transport failures, HTTP 429, and upstream 502-504 answers never
    /// reach the caller as status codes; they are classified here:
    ///
    /// * request error, timeout -> [`ProviderError::NetworkError`] /
    ///   [`ProviderError::Timeout`]
    /// * HTTP 429 -> [`ProviderError::RateLimited`] (with `Retry-After`
    ///   when the API sent one)
    /// * HTTP 502-504 -> [`ProviderError::NetworkError`]
    ///
    /// Everything else, including 4xx API errors, is returned for the
    /// provider's own error mapping.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(provider_name, &e))?;

        let status = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status}");

        match status {
            429 => {
                let retry_after = retry_after_seconds(&response);
                let body = response.text().await.unwrap_or_default();
                log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
                Err(ProviderError::RateLimited {
                    provider: provider_name.to_string(),
                    retry_after,
                    raw_message: Some(body),
                })
            }
            502..=504 => {
                let body = response.text().await.unwrap_or_default();
                log::warn!("[{provider_name}] Upstream server error (HTTP {status})");
                Err(ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("HTTP {status}: {body}"),
                })
            }
            _ => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| ProviderError::NetworkError {
                        provider: provider_name.to_string(),
                        detail: format!("Failed to read response body: {e}"),
                    })?;
                log::debug!(
                    "[{provider_name}] Response Body: {}",
                    truncate_for_log(&body)
                );
                Ok((status, body))
            }
        }
    }

    /// Parses a JSON response body, logging the raw text on failure.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!(
                "[{provider_name}] JSON parse failed: {e}; raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// Maps a reqwest transport failure onto the error taxonomy.
fn transport_error(provider_name: &str, e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    }
}

/// Parsed `Retry-After` header, when present and numeric.
fn retry_after_seconds(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

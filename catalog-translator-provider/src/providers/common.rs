//! Shared provider helpers.

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Creates an HTTP client with timeouts configured.
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}

// ============ Language Codes ============

/// Normalizes a language code for query parameters: trimmed and lowercased.
pub fn normalize_lang_code(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_code_normalization() {
        assert_eq!(normalize_lang_code(" EN "), "en");
        assert_eq!(normalize_lang_code("ro"), "ro");
    }
}

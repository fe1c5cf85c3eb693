//! DeepL wire types.

use serde::Deserialize;

/// Response body of `POST /v2/translate`.
#[derive(Debug, Deserialize)]
pub(crate) struct DeeplTranslateResponse {
    pub translations: Vec<DeeplTranslation>,
}

/// One translated text entry.
#[derive(Debug, Deserialize)]
pub(crate) struct DeeplTranslation {
    #[allow(dead_code)]
    pub detected_source_language: Option<String>,
    pub text: String,
}

/// Response body of `GET /v2/usage`.
#[derive(Debug, Deserialize)]
pub(crate) struct DeeplUsageResponse {
    pub character_count: u64,
    pub character_limit: u64,
}

/// Error body DeepL attaches to non-2xx answers.
#[derive(Debug, Deserialize)]
pub(crate) struct DeeplErrorResponse {
    pub message: Option<String>,
}

//! Google Translate provider (unofficial web endpoint).

mod error;
mod http;
mod provider;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) const GOOGLE_API_BASE: &str = "https://translate.googleapis.com/translate_a/single";
/// The endpoint rejects requests without a browser-like User-Agent.
pub(crate) const GOOGLE_USER_AGENT: &str = "Mozilla/5.0";

/// Google Translate provider.
///
/// Uses the free `client=gtx` endpoint; no credentials required. For
/// production volumes the official Cloud Translation API is the better fit.
pub struct GoogleProvider {
    pub(crate) client: Client,
}

impl GoogleProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: create_http_client(),
        }
    }
}

impl Default for GoogleProvider {
    fn default() -> Self {
        Self::new()
    }
}

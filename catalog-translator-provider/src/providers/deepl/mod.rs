//! DeepL translation provider.

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) use types::{DeeplTranslateResponse, DeeplUsageResponse};

pub(crate) const DEEPL_API_BASE: &str = "https://api-free.deepl.com/v2";

/// DeepL REST API v2 provider.
pub struct DeeplProvider {
    pub(crate) client: Client,
    pub(crate) api_key: String,
}

impl DeeplProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: create_http_client(),
            api_key,
        }
    }
}

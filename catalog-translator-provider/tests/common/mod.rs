//! Shared test helpers for live-API integration tests.

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use catalog_translator_provider::{
    create_provider, LanguagePair, ProviderCredentials, TranslationProvider,
};

/// Skip a test when the named environment variables are missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// A live provider plus the language pair the suite exercises.
pub struct TestContext {
    pub provider: Arc<dyn TranslationProvider>,
    pub languages: LanguagePair,
}

impl TestContext {
    /// Google needs no credentials, only an opt-in via `GOOGLE_LIVE_TESTS`.
    pub fn google() -> Result<Self, Box<dyn std::error::Error>> {
        let provider = create_provider(ProviderCredentials::Google {})?;
        Ok(Self {
            provider,
            languages: test_language_pair(),
        })
    }

    /// DeepL reads `DEEPL_API_KEY` from the environment.
    pub fn deepl() -> Result<Self, Box<dyn std::error::Error>> {
        let api_key = env::var("DEEPL_API_KEY")?;
        let provider = create_provider(ProviderCredentials::Deepl { api_key })?;
        Ok(Self {
            provider,
            languages: test_language_pair(),
        })
    }
}

/// Language pair under test; override via `TEST_SOURCE_LANG`/`TEST_TARGET_LANG`.
pub fn test_language_pair() -> LanguagePair {
    LanguagePair::new(
        env::var("TEST_SOURCE_LANG").unwrap_or_else(|_| "en".to_string()),
        env::var("TEST_TARGET_LANG").unwrap_or_else(|_| "ro".to_string()),
    )
}

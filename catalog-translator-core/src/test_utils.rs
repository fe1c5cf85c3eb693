//! Test helpers.
//!
//! Provides a mock provider and document builders for unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use catalog_translator_provider::{
    LanguagePair, ProviderError, ProviderMetadata, Result as ProviderResult,
    TranslationProvider,
};

// ===== MockProvider =====

/// Recording translation provider.
///
/// Translates `text` to `"[<target>] <text>"` and records every call; can be
/// told to fail for texts containing a marker substring.
pub struct MockProvider {
    calls: Mutex<Vec<String>>,
    fail_containing: Option<String>,
}

impl MockProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_containing: None,
        })
    }

    /// Provider that fails every call whose text contains `marker`.
    pub fn failing_on(marker: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_containing: Some(marker.to_string()),
        })
    }

    /// Every text passed to `translate`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: "mock".to_string(),
            name: "Mock".to_string(),
            description: "Recording in-memory provider".to_string(),
            required_fields: vec![],
            supports_auto_detect: true,
        }
    }

    async fn validate_credentials(&self) -> ProviderResult<bool> {
        Ok(true)
    }

    async fn translate(&self, text: &str, languages: &LanguagePair) -> ProviderResult<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }
        if let Some(marker) = &self.fail_containing {
            if text.contains(marker) {
                return Err(ProviderError::NetworkError {
                    provider: "mock".to_string(),
                    detail: format!("injected failure for {text:?}"),
                });
            }
        }
        Ok(format!("[{}] {text}", languages.target))
    }
}

// ===== Document builders =====

/// A catalog document with `records` products, each carrying a prose name,
/// a code-like SKU, two categories, and one Color attribute.
pub fn sample_catalog_xml(records: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<catalog>\n");
    for i in 1..=records {
        xml.push_str(&format!(
            "  <product id=\"{i}\">\n    \
             <name>Product {i} deluxe</name>\n    \
             <sku>SKU-{i}</sku>\n    \
             <category>Electronics {i}</category>\n    \
             <category>Accessories {i}</category>\n    \
             <attribute>\n      <name>Color</name>\n      <label>Matte black {i}</label>\n    </attribute>\n  \
             </product>\n"
        ));
    }
    xml.push_str("</catalog>");
    xml
}

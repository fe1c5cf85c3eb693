//! Shared helpers for the translation-run integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use catalog_translator_core::services::RunControl;
use catalog_translator_core::traits::RunObserver;
use catalog_translator_core::types::{
    FieldDescriptor, FieldLocator, LanguagePair, ProviderMetadata, RunReport, TranslationSample,
};
use catalog_translator_provider::{
    ProviderError, Result as ProviderResult, TranslationProvider,
};

// ===== MockProvider =====

/// Recording provider: translates to `"[<target>] <text>"`, remembers every
/// call, optionally fails for texts containing a marker.
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

    pub fn failing_on(marker: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_containing: Some(marker.to_string()),
        })
    }

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

// ===== Observers =====

/// Observer recording everything it is told.
#[derive(Default)]
pub struct CollectingObserver {
    pub progress: Mutex<Vec<(usize, usize, String)>>,
    pub fields: Mutex<Vec<String>>,
    pub samples: Mutex<Vec<Vec<TranslationSample>>>,
    pub paused: AtomicUsize,
    pub resumed: AtomicUsize,
    pub reports: Mutex<Vec<RunReport>>,
}

impl CollectingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn progress_entries(&self) -> Vec<(usize, usize, String)> {
        self.progress.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn sample_batches(&self) -> Vec<Vec<TranslationSample>> {
        self.samples.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn finished_reports(&self) -> Vec<RunReport> {
        self.reports.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl RunObserver for CollectingObserver {
    fn on_progress(&self, current: usize, total: usize, label: &str) {
        if let Ok(mut progress) = self.progress.lock() {
            progress.push((current, total, label.to_string()));
        }
    }

    fn on_field(&self, label: &str) {
        if let Ok(mut fields) = self.fields.lock() {
            fields.push(label.to_string());
        }
    }

    fn on_samples(&self, samples: &[TranslationSample]) {
        if let Ok(mut batches) = self.samples.lock() {
            batches.push(samples.to_vec());
        }
    }

    fn on_paused(&self) {
        self.paused.fetch_add(1, Ordering::SeqCst);
    }

    fn on_resumed(&self) {
        self.resumed.fetch_add(1, Ordering::SeqCst);
    }

    fn on_finished(&self, report: &RunReport) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(report.clone());
        }
    }
}

/// Observer that flips the stop flag when progress reaches `stop_at`.
pub struct StopAtObserver {
    control: RunControl,
    stop_at: usize,
}

impl StopAtObserver {
    pub fn new(control: RunControl, stop_at: usize) -> Self {
        Self { control, stop_at }
    }
}

impl RunObserver for StopAtObserver {
    fn on_progress(&self, current: usize, _total: usize, _label: &str) {
        if current == self.stop_at {
            self.control.stop();
        }
    }
}

// ===== Fixtures =====

/// A catalog with `records` products: prose name, code-like SKU, two
/// categories, one Color attribute each.
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

/// Writes `xml` into `dir` and returns the file path.
pub fn write_catalog(dir: &tempfile::TempDir, name: &str, xml: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, xml).expect("failed to write test catalog");
    path
}

/// Field descriptor shorthand (samples are irrelevant for runs).
pub fn field(name: &str, locator: FieldLocator) -> FieldDescriptor {
    FieldDescriptor {
        name: name.to_string(),
        locator,
        sample: String::new(),
    }
}

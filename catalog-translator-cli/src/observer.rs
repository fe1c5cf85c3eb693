//! Console rendering of run notifications.

use catalog_translator_core::traits::RunObserver;
use catalog_translator_core::types::TranslationSample;

/// Prints progress and samples to the terminal; field-level chatter goes to
/// the debug log only.
pub struct ConsoleObserver;

impl RunObserver for ConsoleObserver {
    fn on_progress(&self, current: usize, total: usize, label: &str) {
        println!("[{current}/{total}] {label}");
    }

    fn on_field(&self, label: &str) {
        log::debug!("{label}");
    }

    fn on_samples(&self, samples: &[TranslationSample]) {
        for sample in samples {
            println!(
                "  preview: {}: {:?} -> {:?}",
                sample.field_name, sample.original_text, sample.translated_text
            );
        }
    }

    fn on_paused(&self) {
        println!("Translation paused");
    }

    fn on_resumed(&self) {
        println!("Translation resumed");
    }
}

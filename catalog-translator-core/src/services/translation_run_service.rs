//! The field-mapping / translation pass.
//!
//! Walks every record of the document in order, extracts text at each
//! selected field's locator, sends prose through the provider, and
//! substitutes the result in place. Codes and SKUs pass through untouched.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use catalog_translator_provider::LanguagePair;

use crate::error::CoreResult;
use crate::services::{RunControl, ServiceContext};
use crate::traits::RunObserver;
use crate::types::{
    FieldDescriptor, FieldLocator, RunOutcome, RunRequest, TranslationSample, ATTRIBUTE_TAG,
    RECORD_TAG,
};
use crate::xml::{XmlDocument, XmlElement};

/// Number of leading records that contribute preview samples.
const SAMPLE_RECORD_COUNT: usize = 5;

/// Trimmed text matching this class is a SKU/code, never prose. The exact
/// character class matters: uppercase letters, digits, whitespace, hyphens,
/// underscores, dots, slashes.
static CODE_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9\s\-_\./]+$").expect("valid literal pattern")
});

/// Whether text is passed through untranslated by the SKU/code heuristic.
#[must_use]
pub fn is_code_like(text: &str) -> bool {
    CODE_LIKE.is_match(text.trim())
}

/// Substitutions planned for one field of one record.
struct FieldPlan<'a> {
    field: &'a FieldDescriptor,
    /// Per occurrence: `None` when the element carries no sole text node,
    /// `Some(text)` otherwise. Indices align with the locator's match order.
    originals: Vec<Option<String>>,
    /// The text each occurrence will be replaced with.
    replacements: Vec<Option<String>>,
}

/// Executes the mapping pass for one run.
pub struct TranslationRunService {
    ctx: Arc<ServiceContext>,
}

impl TranslationRunService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Runs the pass: load, translate record by record, serialize.
    ///
    /// The document is owned by this call for its whole duration. Stop and
    /// pause flags are honored at record boundaries; a stop yields
    /// [`RunOutcome::Stopped`] and writes no output document.
    pub async fn run(
        &self,
        request: &RunRequest,
        control: &RunControl,
        observer: &dyn RunObserver,
    ) -> CoreResult<RunOutcome> {
        let mut doc = XmlDocument::load(&request.input_path)?;
        let total = doc.count_elements(RECORD_TAG);
        log::info!(
            "translating {total} records from {} ({})",
            request.input_path.display(),
            request.languages
        );

        for index in 0..total {
            control.wait_while_paused(observer).await;
            if control.is_stopped() {
                log::info!("run stopped by user after {index} of {total} records");
                return Ok(RunOutcome::Stopped {
                    records_completed: index,
                });
            }

            observer.on_progress(index + 1, total, &format!("Product {}/{total}", index + 1));
            self.process_record(&mut doc, index, request, observer, index < SAMPLE_RECORD_COUNT)
                .await;

            if !self.ctx.options.record_pacing.is_zero() {
                tokio::time::sleep(self.ctx.options.record_pacing).await;
            }
        }

        doc.save(&request.output_path)?;
        Ok(RunOutcome::Completed { records: total })
    }

    /// Plans, samples, and applies the substitutions of one record.
    ///
    /// Each occurrence is translated exactly once; sampled records emit
    /// their preview batch before any mutation, pairing the pre-mutation
    /// original with the translation that is then applied.
    async fn process_record(
        &self,
        doc: &mut XmlDocument,
        index: usize,
        request: &RunRequest,
        observer: &dyn RunObserver,
        sampled: bool,
    ) {
        let mut plans: Vec<FieldPlan<'_>> = Vec::with_capacity(request.fields.len());

        for field in &request.fields {
            observer.on_field(&format!("Translating {}", field.locator));

            let originals = match doc.nth_element(RECORD_TAG, index) {
                Some(record) => collect_occurrences(record, &field.locator),
                None => Vec::new(),
            };

            let mut replacements = Vec::with_capacity(originals.len());
            for original in &originals {
                match original {
                    Some(text) => replacements.push(Some(
                        self.translate_or_passthrough(text, &request.languages).await,
                    )),
                    None => replacements.push(None),
                }
            }

            plans.push(FieldPlan {
                field,
                originals,
                replacements,
            });
        }

        if sampled {
            let samples: Vec<TranslationSample> =
                plans.iter().filter_map(FieldPlan::sample).collect();
            observer.on_samples(&samples);
        }

        if let Some(record) = doc.nth_element_mut(RECORD_TAG, index) {
            for plan in &plans {
                apply_replacements(record, &plan.field.locator, &plan.replacements);
            }
        }
    }

    /// Translate prose; pass codes, blanks, and failures through unchanged.
    ///
    /// A failed provider call is logged and masked by returning the
    /// original text; one bad field never aborts the run.
    pub(crate) async fn translate_or_passthrough(
        &self,
        text: &str,
        languages: &LanguagePair,
    ) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() || CODE_LIKE.is_match(trimmed) {
            return text.to_string();
        }

        match self.ctx.provider.translate(text, languages).await {
            Ok(translated) => translated,
            Err(e) => {
                if e.is_expected() {
                    log::warn!("translation failed, keeping original text: {e}");
                } else {
                    log::error!("translation failed, keeping original text: {e}");
                }
                text.to_string()
            }
        }
    }
}

impl FieldPlan<'_> {
    /// Preview triple from the first occurrence that carries text.
    fn sample(&self) -> Option<TranslationSample> {
        self.originals
            .iter()
            .zip(&self.replacements)
            .find_map(|(original, replacement)| match (original, replacement) {
                (Some(original), Some(translated)) if !original.is_empty() => {
                    Some(TranslationSample {
                        field_name: self.field.name.clone(),
                        original_text: original.clone(),
                        translated_text: translated.clone(),
                    })
                }
                _ => None,
            })
    }
}

/// Reads the text of every element the locator matches in this record, in
/// the same order [`apply_replacements`] visits them.
fn collect_occurrences(record: &XmlElement, locator: &FieldLocator) -> Vec<Option<String>> {
    let text_of = |el: &XmlElement| el.text().map(str::to_string);
    match locator {
        FieldLocator::DirectChild(tag) => record
            .child_elements()
            .filter(|el| el.name == *tag)
            .map(text_of)
            .collect(),
        FieldLocator::Repeating(tag) => record
            .descendants_named(tag)
            .into_iter()
            .map(text_of)
            .collect(),
        FieldLocator::AttributeLabel(attr_name) => record
            .descendants_named(ATTRIBUTE_TAG)
            .into_iter()
            .filter(|el| attribute_matches(el, attr_name))
            .map(|el| el.find_child("label").and_then(XmlElement::text).map(str::to_string))
            .collect(),
    }
}

/// Applies planned replacements to every matching element, by match order.
fn apply_replacements(
    record: &mut XmlElement,
    locator: &FieldLocator,
    replacements: &[Option<String>],
) {
    let mut index = 0;
    match locator {
        FieldLocator::DirectChild(tag) => {
            record.for_each_child_mut(tag, &mut |el| {
                if let Some(Some(translated)) = replacements.get(index) {
                    el.set_text(translated.clone());
                }
                index += 1;
            });
        }
        FieldLocator::Repeating(tag) => {
            record.for_each_descendant_mut(tag, &mut |el| {
                if let Some(Some(translated)) = replacements.get(index) {
                    el.set_text(translated.clone());
                }
                index += 1;
            });
        }
        FieldLocator::AttributeLabel(attr_name) => {
            record.for_each_descendant_mut(ATTRIBUTE_TAG, &mut |el| {
                if !attribute_matches(el, attr_name) {
                    return;
                }
                let current = index;
                index += 1;
                if let Some(Some(translated)) = replacements.get(current) {
                    if let Some(label) = el.children.iter_mut().find_map(|node| match node {
                        crate::xml::XmlNode::Element(child) if child.name == "label" => {
                            Some(child)
                        }
                        _ => None,
                    }) {
                        label.set_text(translated.clone());
                    }
                }
            });
        }
    }
}

/// Whether an `attribute` element's `name` child equals `attr_name`.
fn attribute_matches(attribute: &XmlElement, attr_name: &str) -> bool {
    attribute
        .find_child("name")
        .and_then(XmlElement::text)
        .is_some_and(|n| n == attr_name)
}

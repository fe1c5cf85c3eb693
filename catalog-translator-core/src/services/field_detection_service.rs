//! Translatable-field detection over the first record of a document.

use std::path::Path;

use crate::error::CoreResult;
use crate::types::{FieldDescriptor, FieldLocator, ATTRIBUTE_TAG, CATEGORY_TAG, RECORD_TAG};
use crate::xml::{XmlDocument, XmlElement};

/// Samples longer than this many characters are cut and marked with `...`.
const SAMPLE_TRUNCATE_CHARS: usize = 50;

/// Inspects one representative record and lists its translatable fields.
pub struct FieldDetectionService;

impl FieldDetectionService {
    /// Detects fields in the document at `path`.
    ///
    /// Fail-soft: a missing file, a parse error, or a document without
    /// records all yield an empty list, never an error.
    #[must_use]
    pub fn detect_fields(path: &Path) -> Vec<FieldDescriptor> {
        match Self::try_detect(path) {
            Ok(fields) => fields,
            Err(e) => {
                log::warn!("field detection failed for {}: {e}", path.display());
                Vec::new()
            }
        }
    }

    fn try_detect(path: &Path) -> CoreResult<Vec<FieldDescriptor>> {
        let doc = XmlDocument::load(path)?;
        Ok(Self::detect_in_document(&doc))
    }

    /// Detects fields in an already-parsed document (read-only).
    #[must_use]
    pub fn detect_in_document(doc: &XmlDocument) -> Vec<FieldDescriptor> {
        let Some(record) = doc.first_element(RECORD_TAG) else {
            return Vec::new();
        };

        let mut fields = Vec::new();

        // Standard fields: one descriptor per direct child element.
        for child in record.child_elements() {
            fields.push(FieldDescriptor {
                name: child.name.clone(),
                locator: FieldLocator::DirectChild(child.name.clone()),
                sample: truncate_sample(child.text().unwrap_or_default()),
            });
        }

        // Nested fields: walk every descendant of the record, count-as-found
        // (duplicates are not collapsed; dedup by locator is the run
        // caller's call).
        for element in record.descendants() {
            if element.name == CATEGORY_TAG {
                fields.push(FieldDescriptor {
                    name: CATEGORY_TAG.to_string(),
                    locator: FieldLocator::Repeating(CATEGORY_TAG.to_string()),
                    sample: truncate_sample(element.text().unwrap_or_default()),
                });
            } else if element.name == ATTRIBUTE_TAG {
                if let Some(attr_name) = attribute_name(element) {
                    let label = element
                        .find_child("label")
                        .and_then(XmlElement::text)
                        .unwrap_or_default();
                    fields.push(FieldDescriptor {
                        name: format!("{ATTRIBUTE_TAG}/{attr_name}"),
                        locator: FieldLocator::AttributeLabel(attr_name.to_string()),
                        sample: label.to_string(),
                    });
                }
            }
        }

        log::debug!("detected {} fields in first record", fields.len());
        fields
    }
}

/// The non-empty text of an attribute element's `name` child.
fn attribute_name(attribute: &XmlElement) -> Option<&str> {
    attribute
        .find_child("name")
        .and_then(XmlElement::text)
        .filter(|t| !t.is_empty())
}

/// First 50 characters of the sample, `...`-suffixed when cut.
fn truncate_sample(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(SAMPLE_TRUNCATE_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

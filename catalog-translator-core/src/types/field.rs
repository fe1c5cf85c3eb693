//! Translatable-field descriptors and their locators.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Element name of the repeating record unit.
pub const RECORD_TAG: &str = "product";
/// Element name of repeating category entries inside a record.
pub const CATEGORY_TAG: &str = "category";
/// Element name of attribute entries (`<attribute><name/><label/></attribute>`).
pub const ATTRIBUTE_TAG: &str = "attribute";

/// Where to find a piece of translatable text within a record.
///
/// A closed set of locator shapes instead of string-prefix parsing; the
/// serialized form stays the original path-string syntax so saved field
/// selections keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldLocator {
    /// Text of every direct child of the record with this tag
    /// (`/product/<tag>`).
    DirectChild(String),
    /// Text of every descendant element with this tag (`//<tag>`).
    Repeating(String),
    /// The `label` text of every `attribute` descendant whose `name` child
    /// equals this value (`//attribute[name='<name>']/label`).
    AttributeLabel(String),
}

impl std::fmt::Display for FieldLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectChild(tag) => write!(f, "/{RECORD_TAG}/{tag}"),
            Self::Repeating(tag) => write!(f, "//{tag}"),
            Self::AttributeLabel(name) => write!(f, "//{ATTRIBUTE_TAG}[name='{name}']/label"),
        }
    }
}

impl std::str::FromStr for FieldLocator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidLocator(s.to_string());

        if let Some(tag) = s.strip_prefix("/product/") {
            if tag.is_empty() || tag.contains('/') {
                return Err(invalid());
            }
            return Ok(Self::DirectChild(tag.to_string()));
        }

        if let Some(rest) = s.strip_prefix("//attribute[name='") {
            let name = rest.strip_suffix("']/label").ok_or_else(invalid)?;
            if name.is_empty() {
                return Err(invalid());
            }
            return Ok(Self::AttributeLabel(name.to_string()));
        }

        if let Some(tag) = s.strip_prefix("//") {
            if tag.is_empty() || tag.contains('/') || tag.contains('[') {
                return Err(invalid());
            }
            return Ok(Self::Repeating(tag.to_string()));
        }

        Err(invalid())
    }
}

impl TryFrom<String> for FieldLocator {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FieldLocator> for String {
    fn from(locator: FieldLocator) -> Self {
        locator.to_string()
    }
}

/// A detected translatable field, offered to the user for selection.
///
/// Produced by the detector from the first record; the `name` may be edited
/// before a run starts. `sample` is display-only text from record #1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Display name (e.g. `"name"`, `"category"`, `"attribute/Color"`).
    pub name: String,
    /// Locator resolving this field inside any record.
    pub locator: FieldLocator,
    /// Sample content from the first record.
    pub sample: String,
}

//! Unified error type definition.

use serde::Serialize;
use thiserror::Error;

// Re-export the provider library's error type
pub use catalog_translator_provider::ProviderError;

/// Core layer error type.
///
/// Run-level failures only: a translation call failing for one field is a
/// recoverable per-unit event handled inside the mapping pass (logged,
/// original text kept) and never becomes a `CoreError`.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The input document could not be read.
    #[error("Failed to read '{path}': {detail}")]
    FileRead { path: String, detail: String },

    /// The output document could not be written.
    #[error("Failed to write '{path}': {detail}")]
    FileWrite { path: String, detail: String },

    /// The document is not well-formed XML.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// The document could not be serialized back to XML text.
    #[error("XML serialize error: {0}")]
    XmlSerialize(String),

    /// A locator string does not match any known locator shape.
    #[error("Invalid field locator: {0}")]
    InvalidLocator(String),

    /// A request failed validation before the run started.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Provider error (converted from the provider library).
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether this is expected behavior (bad input, bad configuration),
    /// used for log-level selection.
    ///
    /// Level `warn` should be used when returning `true`, `error` otherwise.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::FileRead { .. }
            | Self::XmlParse(_)
            | Self::InvalidLocator(_)
            | Self::ValidationError(_) => true,
            Self::Provider(e) => e.is_expected(),
            _ => false,
        }
    }
}

/// Core layer Result type alias.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_read() {
        let e = CoreError::FileRead {
            path: "in.xml".to_string(),
            detail: "No such file".to_string(),
        };
        assert_eq!(e.to_string(), "Failed to read 'in.xml': No such file");
    }

    #[test]
    fn expected_classification() {
        assert!(CoreError::XmlParse("boom".into()).is_expected());
        assert!(CoreError::InvalidLocator("??".into()).is_expected());
        assert!(!CoreError::FileWrite {
            path: "out.xml".into(),
            detail: "denied".into(),
        }
        .is_expected());
    }

    #[test]
    fn provider_error_passes_through_expectation() {
        let e = CoreError::Provider(ProviderError::InvalidCredentials {
            provider: "deepl".into(),
            raw_message: None,
        });
        assert!(e.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = CoreError::XmlParse("unexpected EOF".into());
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"XmlParse\""));
    }
}

use serde::{Deserialize, Serialize};

// ============ Language Types ============

/// Source language code meaning "let the provider detect the language".
pub const AUTO_SOURCE: &str = "auto";

/// A source/target language pair for a translation request.
///
/// Language codes are lowercase ISO 639-1 identifiers (`"en"`, `"de"`, `"ro"`).
/// The source may be [`AUTO_SOURCE`] to request provider-side detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Source language code, or `"auto"`.
    pub source: String,
    /// Target language code.
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Whether the source language should be auto-detected by the provider.
    #[must_use]
    pub fn source_is_auto(&self) -> bool {
        self.source.is_empty() || self.source.eq_ignore_ascii_case(AUTO_SOURCE)
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

// ============ Provider Types ============

/// Identifies which translation provider implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Unofficial Google Translate web endpoint. Requires feature `google`.
    #[cfg(feature = "google")]
    Google,
    /// DeepL REST API v2. Requires feature `deepl`.
    #[cfg(feature = "deepl")]
    Deepl,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "google")]
            Self::Google => write!(f, "google"),
            #[cfg(feature = "deepl")]
            Self::Deepl => write!(f, "deepl"),
        }
    }
}

// ============ Credential Types ============

/// Credentials selecting and configuring a concrete provider.
///
/// The serialized form is tagged by provider id, so credentials stored in a
/// config file round-trip without a separate type discriminator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum ProviderCredentials {
    /// Google web endpoint. No credentials required. Requires feature `google`.
    #[cfg(feature = "google")]
    Google {},

    /// DeepL API key. Requires feature `deepl`.
    #[cfg(feature = "deepl")]
    Deepl {
        /// DeepL API authentication key.
        api_key: String,
    },
}

impl ProviderCredentials {
    /// The provider these credentials belong to.
    #[must_use]
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "google")]
            Self::Google {} => ProviderType::Google,
            #[cfg(feature = "deepl")]
            Self::Deepl { .. } => ProviderType::Deepl,
        }
    }
}

// ============ Metadata Types ============

/// The input type of a credential field (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
}

/// Definition of a single credential field required by a provider.
///
/// Used to dynamically build credential forms in UIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentialField {
    /// Machine-readable field key (e.g., `"apiKey"`).
    pub key: String,
    /// Human-readable label (e.g., `"API Key"`).
    pub label: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// Static metadata describing a translation provider.
///
/// Obtain via [`TranslationProvider::metadata()`](crate::TranslationProvider::metadata)
/// or [`get_all_provider_metadata()`](crate::get_all_provider_metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider identifier (matches [`TranslationProvider::id`](crate::TranslationProvider::id)).
    pub id: String,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Credential fields required to authenticate with this provider.
    pub required_fields: Vec<ProviderCredentialField>,
    /// Whether the provider can detect the source language itself.
    pub supports_auto_detect: bool,
}

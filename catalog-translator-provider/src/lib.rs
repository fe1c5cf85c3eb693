//! # catalog-translator-provider
//!
//! A unified translation-provider abstraction library for sending catalog
//! text through machine-translation backends.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Google Translate](https://translate.google.com/) (unofficial web endpoint) | `google` | none |
//! | [DeepL](https://www.deepl.com/) (REST API v2) | `deepl` | API Key |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)* — Enable all providers listed above.
//! - **`google`** — Enable only the Google Translate provider.
//! - **`deepl`** — Enable only the DeepL provider.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use catalog_translator_provider::{
//!     create_provider, LanguagePair, ProviderCredentials,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a provider from credentials
//!     let provider = create_provider(ProviderCredentials::Google {})?;
//!
//!     // 2. Probe the backend
//!     provider.validate_credentials().await?;
//!
//!     // 3. Translate
//!     let pair = LanguagePair::new("en", "ro");
//!     let translated = provider.translate("Electronics", &pair).await?;
//!     println!("{translated}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! The error enum provides structured variants for common failure modes:
//!
//! - [`ProviderError::InvalidCredentials`] — authentication failed
//! - [`ProviderError::RateLimited`] — API rate limit exceeded (transient)
//! - [`ProviderError::QuotaExceeded`] — translation quota exhausted
//! - [`ProviderError::NetworkError`] — network connectivity issue (transient)
//!
//! No call is retried by this library: a failed translation surfaces once
//! and the caller owns the fallback policy.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_provider, get_all_provider_metadata};

// Re-export core trait only (internal traits are not exported)
pub use traits::TranslationProvider;

// Re-export types
pub use types::{
    FieldType, LanguagePair, ProviderCredentialField, ProviderCredentials, ProviderMetadata,
    ProviderType, AUTO_SOURCE,
};

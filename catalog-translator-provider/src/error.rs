use serde::{Deserialize, Serialize};

/// Unified error type for all translation provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// # Transient Errors
///
/// The following variants represent transient failures:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
///
/// Callers decide what to do with them; this library never retries a
/// translation call on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    ///
    /// Unlike [`QuotaExceeded`](Self::QuotaExceeded), the request should
    /// succeed after waiting.
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The provided credentials are invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The account's translation quota has been exhausted.
    ///
    /// Unlike [`RateLimited`](Self::RateLimited), this is not a transient
    /// condition.
    QuotaExceeded {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A language code in the request is not supported by this provider.
    UnsupportedLanguage {
        /// Provider that produced the error.
        provider: String,
        /// The offending language code.
        language: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The provider returned a well-formed response with no translated text.
    EmptyTranslation {
        /// Provider that produced the error.
        provider: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether this error is expected behavior (bad credentials, exhausted
    /// quota, unsupported language), used for log-level selection.
    ///
    /// Returns `true` for `warn`-level errors, `false` for `error`-level.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::QuotaExceeded { .. }
                | Self::UnsupportedLanguage { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::QuotaExceeded { provider, .. } => {
                write!(f, "[{provider}] Translation quota exceeded")
            }
            Self::UnsupportedLanguage {
                provider,
                language,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Unsupported language '{language}': {msg}")
                } else {
                    write!(f, "[{provider}] Unsupported language '{language}'")
                }
            }
            Self::EmptyTranslation { provider } => {
                write!(f, "[{provider}] Empty translation result")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "test".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Network error: connection refused");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            provider: "deepl".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[deepl] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_rate_limited_without_retry() {
        let e = ProviderError::RateLimited {
            provider: "google".to_string(),
            retry_after: None,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[google] Rate limited");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "deepl".to_string(),
            raw_message: Some("wrong key".to_string()),
        };
        assert_eq!(e.to_string(), "[deepl] Invalid credentials: wrong key");
    }

    #[test]
    fn display_unsupported_language() {
        let e = ProviderError::UnsupportedLanguage {
            provider: "deepl".to_string(),
            language: "xx".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[deepl] Unsupported language 'xx'");
    }

    #[test]
    fn display_empty_translation() {
        let e = ProviderError::EmptyTranslation {
            provider: "google".to_string(),
        };
        assert_eq!(e.to_string(), "[google] Empty translation result");
    }

    #[test]
    fn display_unknown() {
        let e = ProviderError::Unknown {
            provider: "test".to_string(),
            raw_code: Some("E001".to_string()),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "[test] something broke");
    }

    #[test]
    fn serialize_json_tagging() {
        let e = ProviderError::RateLimited {
            provider: "deepl".to_string(),
            retry_after: Some(60),
            raw_message: Some("too many requests".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RateLimited\""));
        assert!(json.contains("\"retry_after\":60"));
    }

    #[test]
    fn deserialize_all_variants() {
        let variants: Vec<ProviderError> = vec![
            ProviderError::NetworkError {
                provider: "t".into(),
                detail: "d".into(),
            },
            ProviderError::Timeout {
                provider: "t".into(),
                detail: "30s".into(),
            },
            ProviderError::RateLimited {
                provider: "t".into(),
                retry_after: Some(30),
                raw_message: None,
            },
            ProviderError::InvalidCredentials {
                provider: "t".into(),
                raw_message: None,
            },
            ProviderError::QuotaExceeded {
                provider: "t".into(),
                raw_message: None,
            },
            ProviderError::UnsupportedLanguage {
                provider: "t".into(),
                language: "xx".into(),
                raw_message: None,
            },
            ProviderError::EmptyTranslation { provider: "t".into() },
            ProviderError::ParseError {
                provider: "t".into(),
                detail: "bad".into(),
            },
            ProviderError::Unknown {
                provider: "t".into(),
                raw_code: Some("E1".into()),
                raw_message: "oops".into(),
            },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: ProviderError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }

    #[test]
    fn expected_variants() {
        assert!(ProviderError::InvalidCredentials {
            provider: "t".into(),
            raw_message: None,
        }
        .is_expected());
        assert!(ProviderError::QuotaExceeded {
            provider: "t".into(),
            raw_message: None,
        }
        .is_expected());
        assert!(!ProviderError::NetworkError {
            provider: "t".into(),
            detail: "x".into(),
        }
        .is_expected());
        assert!(!ProviderError::EmptyTranslation { provider: "t".into() }.is_expected());
    }
}

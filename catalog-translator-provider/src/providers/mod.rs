//! Concrete provider implementations.

pub(crate) mod common;

#[cfg(feature = "deepl")]
mod deepl;
#[cfg(feature = "google")]
mod google;

#[cfg(feature = "deepl")]
pub use deepl::DeeplProvider;
#[cfg(feature = "google")]
pub use google::GoogleProvider;

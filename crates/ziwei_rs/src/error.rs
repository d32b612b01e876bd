//! Error types for the convenience layer.

use thiserror::Error;
use ziwei_calendar::DateError;

/// Invalid display or option configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("unsupported locale {0:?}")]
    UnsupportedLocale(String),
}

/// Errors surfaced by `ziwei_rs`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ZiweiError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// A house or star name that matches nothing.
    #[error("unknown name {0:?}")]
    UnknownName(String),
}

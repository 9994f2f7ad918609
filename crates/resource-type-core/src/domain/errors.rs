//! Errors - resource type と version のパースエラー

use thiserror::Error;

/// Failure to build a [`ResourceType`](super::ResourceType).
///
/// Only missing or empty input fails; every other string parses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceTypeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Failure to read a string as a [`Version`](super::Version).
///
/// The resource type parser treats any of these as "no version".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("version string is empty")]
    Empty,

    #[error("invalid {component} component: {value:?}")]
    InvalidNumber {
        component: &'static str,
        value: String,
    },

    #[error("invalid qualifier: {0:?}")]
    InvalidQualifier(String),

    #[error("too many components in version: {0:?}")]
    TooManyComponents(String),
}

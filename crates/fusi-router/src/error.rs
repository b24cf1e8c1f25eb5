//! Error types for fusi-router

use thiserror::Error;

/// Result type alias for registry configuration
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Raised when a router is built or populated with an illegal value.
///
/// Every variant describes a caller configuration bug. Lookups never
/// produce one; absence is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Router prefix without a leading slash
    #[error("Parameter 'prefix' must start with a leading slash '/' not '{0}'")]
    InvalidPrefix(String),

    /// A registration parameter has an unusable value
    #[error("Parameter '{param}' is invalid: {reason}")]
    InvalidParameter { param: &'static str, reason: String },

    /// The qualified route name is already registered
    #[error("Route with name '{0}' already exists")]
    DuplicateName(String),

    /// A name validator rejected the qualified route name
    #[error("Invalid route name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A pattern validator rejected the qualified pattern
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Method token is empty or contains non-token characters
    #[error("Invalid method token: '{0}'")]
    InvalidMethod(String),
}

impl ConfigurationError {
    /// Rejection of a route name, for use by custom validators
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Rejection of a route pattern, for use by custom validators
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn empty(param: &'static str) -> Self {
        Self::InvalidParameter {
            param,
            reason: "must not be empty".to_string(),
        }
    }
}

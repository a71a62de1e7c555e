//! Error types for naming operations

use thiserror::Error;

/// Errors that can occur while building or validating a resource name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// No cloud profile is registered under the given identifier
    #[error("unsupported cloud {0:?}")]
    UnsupportedCloud(String),

    /// A derived cloud profile failed to decode its resource definition
    /// dataset. Sticky: the same error is returned on every later call.
    #[error("decode {cloud} resource definitions: {message}")]
    ProfileDecode {
        /// Cloud whose dataset failed to decode
        cloud: String,
        /// Underlying decode failure
        message: String,
    },

    /// A style name did not match any recognized joining convention
    #[error("unsupported style {0:?}")]
    UnsupportedStyle(String),

    /// The finished name failed one of the resource type's structural rules
    #[error("resource {resource:?} name {name:?} {rule}")]
    ConstraintViolation {
        /// Resource type key whose constraint was violated
        resource: String,
        /// The candidate name that failed
        name: String,
        /// The specific rule that failed
        rule: RuleViolation,
    },
}

/// The specific structural rule a candidate name violated
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("is shorter than {min} characters")]
    TooShort { min: usize },

    #[error("exceeds {max} characters")]
    TooLong { max: usize },

    /// Carries the human-readable pattern description when one exists,
    /// otherwise the raw pattern source
    #[error("must match: {requirement}")]
    PatternMismatch { requirement: String },

    #[error("must not start with prefix {prefix:?}")]
    ForbiddenPrefix { prefix: String },

    #[error("must not end with suffix {suffix:?}")]
    ForbiddenSuffix { suffix: String },

    #[error("must not contain {substring:?}")]
    ForbiddenSubstring { substring: String },

    #[error("must not be formatted as an IP address")]
    IpAddressShape,
}

/// Result type for naming operations
pub type NamingResult<T> = Result<T, NamingError>;

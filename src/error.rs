//! Error types for the portfolio contact client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::errors`] since they never reach
//! the network layer.

use crate::domain::FieldErrors;
use thiserror::Error;

/// Errors that can occur when talking to the mail-relay service.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The request could not be sent or no response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// The relay answered with a non-success status code
    #[error("Relay rejected message (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// Failed to encode the request body
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

impl RelayError {
    /// Whether a response came back from the relay at all.
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned by the contact form when a submission cannot start or finish.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A submission is already outstanding
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// One or more fields failed validation
    #[error("Form has invalid fields: {0}")]
    Invalid(FieldErrors),

    /// `finish_submit` was called without a matching `begin_submit`
    #[error("No submission is in flight")]
    NotSubmitting,
}

/// Convenience type alias for Results with RelayError
pub type RelayResult<T> = Result<T, RelayError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;

//! Typed errors for the order form
//!
//! # Error Categories
//!
//! - [`FormError`]: what a submit attempt can end with
//! - [`TransportError`]: the outbound order call failed
//! - [`ConfigError`]: configuration values the form cannot work with
//!
//! None of these is fatal: the form stays interactive after any of them.

use super::validation::ValidationResult;
use thiserror::Error;

/// Errors returned by the order form controller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// One or more fields failed their rules; nothing was sent
    #[error("Order is invalid: {0}")]
    Validation(ValidationResult),

    /// The order was sent but not acknowledged
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A previous submission has not completed yet
    #[error("An order submission is already in flight")]
    SubmissionInFlight,

    /// An outcome arrived for a submission that is no longer in flight
    #[error("Submission {id} is not the one in flight")]
    StaleSubmission { id: u64 },

    /// An input event named a field the form does not have
    #[error("Unknown field '{name}'")]
    UnknownField { name: String },
}

impl FormError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::Validation(_) => "VALIDATION_ERROR",
            FormError::Transport(e) => e.error_code(),
            FormError::SubmissionInFlight => "SUBMISSION_IN_FLIGHT",
            FormError::StaleSubmission { .. } => "STALE_SUBMISSION",
            FormError::UnknownField { .. } => "UNKNOWN_FIELD",
        }
    }

    /// Field errors, when this is a validation failure
    pub fn field_errors(&self) -> Option<&ValidationResult> {
        match self {
            FormError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Outbound order call failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The endpoint could not be reached
    #[error("Order request failed: {message}")]
    Network { message: String },

    /// No answer within the configured timeout
    #[error("Order request timed out")]
    Timeout,

    /// The endpoint answered with a non-success status
    #[error("Order rejected with status {status}")]
    Rejected { status: u16 },
}

impl TransportError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TransportError::Network { .. } => "TRANSPORT_NETWORK",
            TransportError::Timeout => "TRANSPORT_TIMEOUT",
            TransportError::Rejected { .. } => "TRANSPORT_REJECTED",
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if let Some(status) = err.status() {
            TransportError::Rejected {
                status: status.as_u16(),
            }
        } else {
            TransportError::Network {
                message: err.to_string(),
            }
        }
    }
}

/// Errors related to configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing configuration field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

//! Error taxonomy for form validation and submission.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is funnelled into a [`SubmitError`] at the form-submit
//! boundary. The controllers turn it into exactly one failure notice that
//! carries [`SubmitError::detail`], and also hand it back to the caller as a
//! typed `Result` so front-ends can pick their own exit behavior.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use crate::fields::Field;

/// A single field-level constraint violation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: Field },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
    #[error("{field} must be a number")]
    NotANumber { field: Field },
    #[error("{field} must be a whole number")]
    NotAWholeNumber { field: Field },
    #[error("{field} is below minimum of {min}")]
    BelowMinimum { field: Field, min: f64 },
    #[error("{field} is above maximum of {max}")]
    AboveMaximum { field: Field, max: f64 },
    #[error("{field} must be a valid email address")]
    InvalidEmail { field: Field },
    #[error("{field} has no option `{value}`")]
    UnknownOption { field: Field, value: String },
}

impl FieldError {
    /// The field this error is attached to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Required { field }
            | Self::TooLong { field, .. }
            | Self::NotANumber { field }
            | Self::NotAWholeNumber { field }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. }
            | Self::InvalidEmail { field }
            | Self::UnknownOption { field, .. } => *field,
        }
    }
}

/// All violations found while validating one draft, in field order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Whether any violation is attached to `field`.
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.0.iter().any(|error| error.field() == field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Token storage could not be read or written.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct StorageError(pub String);

/// Why a form submission did not succeed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    InFlight,
    #[error("not signed in")]
    NotSignedIn,
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),
    #[error("network error: {0}")]
    Transport(String),
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },
    #[error("server error ({status}): {detail}")]
    Server { status: u16, detail: String },
    #[error("unexpected response: {0}")]
    Malformed(String),
    #[error("token storage failed: {0}")]
    Storage(String),
}

impl SubmitError {
    /// Classify a non-success HTTP status: 5xx is a server fault, everything
    /// else is a rejection of the request.
    #[must_use]
    pub fn from_status(status: u16, detail: String) -> Self {
        if status >= 500 {
            Self::Server { status, detail }
        } else {
            Self::Rejected { status, detail }
        }
    }

    /// User-facing failure reason. Server-reported failures yield the
    /// server's own detail string verbatim.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Rejected { detail, .. } | Self::Server { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl From<StorageError> for SubmitError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error.0)
    }
}

//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

use crate::id::ServiceId;

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant was violated.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("the service catalog must contain at least one service")]
    EmptyCatalog,

    #[error("service id {0} is used more than once")]
    DuplicateServiceId(ServiceId),

    #[error("`{raw}` is not a valid service id")]
    MalformedServiceId { raw: String },
}

/// A lookup referenced a record that does not exist.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{record} {id} not found")]
pub struct NotFoundError {
    pub record: &'static str,
    pub id: String,
}

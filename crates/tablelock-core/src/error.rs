//! Validation errors for tablelock-core.
//!
//! Every variant renders as the message returned to the caller, so the
//! `Display` text is part of the API contract.

use thiserror::Error;

/// Input rejected before it reaches the lock registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The resource identifier is missing, not a string, or blank.
    #[error("resourceId is required and must be a non-empty string")]
    InvalidTableId,

    /// The holder identifier is missing, not a string, or blank.
    #[error("holderId is required and must be a non-empty string")]
    InvalidHolderId,

    /// The duration is missing, not a number, or not strictly positive.
    #[error("duration is required and must be a positive number")]
    InvalidDuration,

    /// The duration is above the one hour ceiling.
    #[error("duration cannot exceed {max} seconds (1 hour)")]
    DurationTooLong { max: u64 },

    /// The request body was not a JSON object.
    #[error("request body must be a JSON object")]
    MalformedBody,
}

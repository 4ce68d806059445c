//! Claim domain errors

use thiserror::Error;

/// Errors that can occur in the claim domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown claim status: {0}")]
    UnknownStatus(String),

    #[error("Unknown affiliation: {0}")]
    UnknownAffiliation(String),
}

//! Item domain errors

use thiserror::Error;

use core_kernel::temporal::TemporalError;

/// Errors that can occur in the item domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidDate(#[from] TemporalError),

    #[error("Unknown item status: {0}")]
    UnknownStatus(String),
}

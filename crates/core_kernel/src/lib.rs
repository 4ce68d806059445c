//! Core Kernel - Foundational types for the lost-and-found system
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure crates:
//! - Strongly-typed identifiers for items and claims
//! - The common error taxonomy
//! - Parsing for the `YYYY-MM-DD` wire date format

pub mod error;
pub mod identifiers;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{ClaimId, ItemId};
pub use temporal::{parse_wire_date, TemporalError, WIRE_DATE_FORMAT};

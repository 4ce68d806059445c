//! Ownership-Claim Domain
//!
//! This crate implements blind claims: an external claimant describes an
//! item from memory, staff compare the description against the stored
//! record and resolve the claim.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Approved (cascades the parent item to Claimed)
//! Pending -> Rejected (the parent item is untouched)
//! ```
//!
//! Re-resolving an already-resolved claim is allowed and re-triggers the
//! cascade when the new status is Approved.

pub mod claim;
pub mod draft;
pub mod error;
pub mod resolution;

pub use claim::{Affiliation, Claim, ClaimStatus};
pub use draft::ClaimDraft;
pub use error::ClaimError;
pub use resolution::{resolve_status_change, ResolutionOutcome};

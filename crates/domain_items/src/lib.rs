//! Found-Item Domain
//!
//! This crate implements the lifecycle of a physical found item, from
//! registration (public submission or staff entry) through approval,
//! claiming, and return.
//!
//! # Item Lifecycle
//!
//! ```text
//! InStock <-> Claimed (claim approval forward, BackToStock backward)
//! InStock/Claimed -> Returned (MarkReturned; BackToStock can still revert)
//! ```
//!
//! Transitions are deliberately unguarded: staff actions are trusted and
//! every force is permitted from every prior status.

pub mod draft;
pub mod error;
pub mod item;
pub mod patch;

pub use draft::ItemDraft;
pub use error::ItemError;
pub use item::{Item, ItemStatus};
pub use patch::ItemPatch;

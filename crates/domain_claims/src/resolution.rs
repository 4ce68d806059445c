//! Claim resolution and the item cascade
//!
//! The one piece of real domain logic in the system: resolving a claim may
//! change the parent item. The rule is asymmetric on purpose:
//!
//! - `Approved` forces the item to `Claimed` in the same operation;
//! - `Rejected` and `Pending` never touch the item. Undoing a wrong
//!   approval is a manual staff action (`BackToStock` on the item).
//!
//! Keeping the rule as an explicit function, rather than a side effect
//! buried in the persistence layer, keeps it visible and testable. The
//! repository executes both writes inside one transaction.

use domain_items::ItemStatus;

use crate::claim::ClaimStatus;

/// The writes a claim-status change requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionOutcome {
    /// Status to store on the claim
    pub claim_status: ClaimStatus,
    /// Status to force on the parent item, when the cascade fires
    pub item_status: Option<ItemStatus>,
}

/// Decides what a status change does to the claim and its parent item.
///
/// The claim's current status never enters the decision: re-resolving an
/// already-resolved claim is permitted and setting `Approved` again
/// re-triggers the cascade.
pub fn resolve_status_change(new_status: ClaimStatus) -> ResolutionOutcome {
    let item_status = match new_status {
        ClaimStatus::Approved => Some(ItemStatus::Claimed),
        ClaimStatus::Rejected | ClaimStatus::Pending => None,
    };

    ResolutionOutcome {
        claim_status: new_status,
        item_status,
    }
}

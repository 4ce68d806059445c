//! Custom assertion helpers for domain types

use domain_claims::{Claim, ClaimStatus};
use domain_items::{Item, ItemStatus};

/// Asserts an item is in stock
pub fn assert_in_stock(item: &Item) {
    assert_eq!(
        item.status,
        ItemStatus::InStock,
        "expected item '{}' to be in stock, was {}",
        item.name,
        item.status
    );
}

/// Asserts an item is claimed
pub fn assert_claimed(item: &Item) {
    assert_eq!(
        item.status,
        ItemStatus::Claimed,
        "expected item '{}' to be claimed, was {}",
        item.name,
        item.status
    );
}

/// Asserts an item is visible on the public listing
pub fn assert_publicly_visible(item: &Item) {
    assert!(
        item.is_publicly_visible(),
        "expected item '{}' to be publicly visible (status={}, approved={})",
        item.name,
        item.status,
        item.approved
    );
}

/// Asserts an item is hidden from the public listing
pub fn assert_hidden_from_public(item: &Item) {
    assert!(
        !item.is_publicly_visible(),
        "expected item '{}' to be hidden from the public listing",
        item.name
    );
}

/// Asserts a claim is still pending
pub fn assert_pending(claim: &Claim) {
    assert_eq!(
        claim.status,
        ClaimStatus::Pending,
        "expected claim by '{}' to be pending, was {}",
        claim.claimant_name,
        claim.status
    );
}

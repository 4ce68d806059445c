//! End-to-end lifecycle scenarios at the domain level
//!
//! These walk the same sequences staff and the public walk through the
//! API, applying the resolution outcomes the way the claims repository
//! does: claim first, then the parent item when the cascade fires.

use domain_claims::{resolve_status_change, Claim, ClaimStatus};
use domain_items::{Item, ItemStatus};
use test_utils::{
    assert_claimed, assert_hidden_from_public, assert_in_stock, assert_pending,
    assert_publicly_visible, ClaimFixtures, ItemFixtures, TestClaimBuilder, TestItemBuilder,
};

/// Mirrors `ClaimsRepository::resolve`: both writes of one transaction
fn resolve(claim: &mut Claim, item: &mut Item, new_status: ClaimStatus) {
    let outcome = resolve_status_change(new_status);
    claim.status = outcome.claim_status;
    if let Some(status) = outcome.item_status {
        item.status = status;
    }
}

#[test]
fn test_public_submission_waits_for_approval() {
    let item = ItemFixtures::wallet();

    assert!(!item.approved);
    assert_in_stock(&item);
    // present in the internal listing, absent from the public one
    assert_hidden_from_public(&item);
}

#[test]
fn test_staff_entry_with_approval_is_public_immediately() {
    let item = ItemFixtures::approved_umbrella();
    assert_publicly_visible(&item);
}

#[test]
fn test_full_happy_path_to_return() {
    let mut item = ItemFixtures::approved_umbrella();
    let mut claim = ClaimFixtures::pending_for(item.id);
    assert_pending(&claim);

    // staff approves the claim: the cascade flips the item in the same step
    resolve(&mut claim, &mut item, ClaimStatus::Approved);
    assert_eq!(claim.status, ClaimStatus::Approved);
    assert_claimed(&item);
    assert_hidden_from_public(&item);

    // the owner picks the item up
    item.mark_returned();
    assert_eq!(item.status, ItemStatus::Returned);
}

#[test]
fn test_rejection_never_touches_the_item() {
    let mut item = ItemFixtures::approved_umbrella();
    let mut claim = ClaimFixtures::pending_for(item.id);

    resolve(&mut claim, &mut item, ClaimStatus::Rejected);
    assert_eq!(claim.status, ClaimStatus::Rejected);
    assert_in_stock(&item);
    assert_publicly_visible(&item);
}

#[test]
fn test_rejecting_after_a_wrong_approval_leaves_item_claimed() {
    // The known asymmetry: un-approving is manual, so the item stays
    // claimed until staff hit back-to-stock themselves.
    let mut item = ItemFixtures::approved_umbrella();
    let mut claim = ClaimFixtures::pending_for(item.id);

    resolve(&mut claim, &mut item, ClaimStatus::Approved);
    assert_claimed(&item);

    resolve(&mut claim, &mut item, ClaimStatus::Rejected);
    assert_eq!(claim.status, ClaimStatus::Rejected);
    assert_claimed(&item);

    // manual correction
    item.back_to_stock();
    assert_publicly_visible(&item);
}

#[test]
fn test_re_approving_a_resolved_claim_re_triggers_the_cascade() {
    let mut item = ItemFixtures::approved_umbrella();
    let mut claim = ClaimFixtures::pending_for(item.id);

    resolve(&mut claim, &mut item, ClaimStatus::Approved);
    item.back_to_stock();

    resolve(&mut claim, &mut item, ClaimStatus::Approved);
    assert_claimed(&item);
}

#[test]
fn test_competing_claims_on_one_item() {
    let mut item = TestItemBuilder::new().with_name("Notebook").approved().build();
    let mut ana = TestClaimBuilder::for_item(item.id).with_claimant("Ana").build();
    let mut bruno = TestClaimBuilder::for_item(item.id)
        .with_claimant("Bruno")
        .with_details("blue sticker on the lid")
        .build();

    // Ana's claim is approved first
    resolve(&mut ana, &mut item, ClaimStatus::Approved);
    assert_claimed(&item);

    // Bruno's rejection does not disturb the now-claimed item
    resolve(&mut bruno, &mut item, ClaimStatus::Rejected);
    assert_claimed(&item);
    assert_eq!(bruno.status, ClaimStatus::Rejected);
}

#[test]
fn test_returned_item_can_come_back_to_stock() {
    let mut item = ItemFixtures::returned_jacket();
    assert_eq!(item.status, ItemStatus::Returned);

    item.back_to_stock();
    assert_in_stock(&item);
}

#[test]
fn test_detailed_claim_keeps_every_optional_field() {
    let item = ItemFixtures::wallet();
    let claim = ClaimFixtures::detailed_for(item.id);

    assert_eq!(claim.item_id, item.id);
    assert!(claim.affiliation.is_some());
    assert_eq!(claim.identifier, "2021001234");
    assert_eq!(claim.contact, "bruno@example.com");
}

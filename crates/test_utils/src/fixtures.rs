//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are consistent and
//! predictable so assertions can use literal values.

use core_kernel::ItemId;
use domain_claims::{Claim, ClaimDraft};
use domain_items::{Item, ItemDraft};

/// Fixture for item test data
pub struct ItemFixtures;

impl ItemFixtures {
    /// A wallet found in the library, submitted publicly (unapproved)
    pub fn wallet() -> Item {
        Item::submitted(
            ItemDraft::new(Some("Wallet"), Some("Library"), Some("2024-03-01")).unwrap(),
        )
    }

    /// An umbrella entered by staff, already approved for the public list
    pub fn approved_umbrella() -> Item {
        Item::registered(
            ItemDraft::new(Some("Umbrella"), Some("Cafeteria"), Some("2024-05-10"))
                .unwrap()
                .with_category(Some("Acessórios")),
            true,
        )
    }

    /// A jacket that already went back to its owner
    pub fn returned_jacket() -> Item {
        let mut item = Item::registered(
            ItemDraft::new(Some("Jacket"), Some("Block C"), Some("2024-01-20")).unwrap(),
            true,
        );
        item.mark_returned();
        item
    }
}

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A pending claim with the minimum required fields
    pub fn pending_for(item_id: ItemId) -> Claim {
        Claim::submitted(
            item_id,
            ClaimDraft::new(Some("Ana"), Some("receipt attached")).unwrap(),
        )
    }

    /// A pending claim with every optional field filled in
    pub fn detailed_for(item_id: ItemId) -> Claim {
        let draft = ClaimDraft::new(Some("Bruno"), Some("has a scratch on the left side"))
            .unwrap()
            .with_affiliation(Some("Estudante"))
            .unwrap()
            .with_identifier(Some("2021001234"))
            .with_contact(Some("bruno@example.com"));
        Claim::submitted(item_id, draft)
    }
}

//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use core_kernel::ItemId;
use domain_claims::{Affiliation, Claim, ClaimDraft, ClaimStatus};
use domain_items::{Item, ItemDraft, ItemStatus};

/// Builder for test items
pub struct TestItemBuilder {
    name: String,
    location: String,
    date: String,
    category: Option<String>,
    description: Option<String>,
    approved: bool,
    status: ItemStatus,
}

impl Default for TestItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestItemBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            name: "Wallet".to_string(),
            location: "Library".to_string(),
            date: "2024-03-01".to_string(),
            category: None,
            description: None,
            approved: false,
            status: ItemStatus::InStock,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn approved(mut self) -> Self {
        self.approved = true;
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the item
    pub fn build(self) -> Item {
        let draft = ItemDraft::new(
            Some(self.name.as_str()),
            Some(self.location.as_str()),
            Some(self.date.as_str()),
        )
        .expect("builder defaults must be valid")
        .with_category(self.category.as_deref())
        .with_description(self.description.as_deref());

        let mut item = Item::registered(draft, self.approved);
        item.status = self.status;
        item
    }
}

/// Builder for test claims
pub struct TestClaimBuilder {
    item_id: ItemId,
    claimant_name: String,
    affiliation: Option<Affiliation>,
    identifier: String,
    contact: String,
    details: String,
    status: ClaimStatus,
}

impl TestClaimBuilder {
    /// Creates a builder targeting the given item
    pub fn for_item(item_id: ItemId) -> Self {
        Self {
            item_id,
            claimant_name: "Ana".to_string(),
            affiliation: None,
            identifier: String::new(),
            contact: String::new(),
            details: "receipt attached".to_string(),
            status: ClaimStatus::Pending,
        }
    }

    pub fn with_claimant(mut self, name: impl Into<String>) -> Self {
        self.claimant_name = name.into();
        self
    }

    pub fn with_affiliation(mut self, affiliation: Affiliation) -> Self {
        self.affiliation = Some(affiliation);
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        let draft = ClaimDraft::new(Some(self.claimant_name.as_str()), Some(self.details.as_str()))
            .expect("builder defaults must be valid")
            .with_identifier(Some(self.identifier.as_str()))
            .with_contact(Some(self.contact.as_str()));

        let mut claim = Claim::submitted(self.item_id, draft);
        claim.affiliation = self.affiliation;
        claim.status = self.status;
        claim
    }
}

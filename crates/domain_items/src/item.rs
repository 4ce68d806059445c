//! Item aggregate

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ItemId;

use crate::draft::ItemDraft;
use crate::patch::ItemPatch;

/// Item status
///
/// The serde renames carry the exact wire labels the existing clients and
/// the database schema use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Available and unclaimed; eligible for the public listing
    #[serde(rename = "Em estoque")]
    InStock,
    /// An ownership claim against it has been approved
    #[serde(rename = "Reivindicado")]
    Claimed,
    /// Handed back to its owner; kept for history, never hard-deleted
    #[serde(rename = "Devolvido")]
    Returned,
}

impl ItemStatus {
    /// The label used on the wire and in the database
    pub fn wire_name(&self) -> &'static str {
        match self {
            ItemStatus::InStock => "Em estoque",
            ItemStatus::Claimed => "Reivindicado",
            ItemStatus::Returned => "Devolvido",
        }
    }

    /// Parses a wire label, rejecting anything outside the closed set
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "Em estoque" => Some(ItemStatus::InStock),
            "Reivindicado" => Some(ItemStatus::Claimed),
            "Devolvido" => Some(ItemStatus::Returned),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A physical found item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Short name shown in listings
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Category label
    pub category: Option<String>,
    /// Where the item was found
    pub found_location: Option<String>,
    /// Calendar date the item was found
    pub found_date: NaiveDate,
    /// Lifecycle status
    pub status: ItemStatus,
    /// Whether the item is visible on the public listing
    pub approved: bool,
    /// Registration timestamp, set once
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Registers an item coming from the public submission form.
    ///
    /// Public submissions always start unapproved so staff can review them
    /// before they show up on the public listing.
    pub fn submitted(draft: ItemDraft) -> Self {
        Self::build(draft, false)
    }

    /// Registers an item entered by staff, with an explicit approval flag.
    pub fn registered(draft: ItemDraft, approved: bool) -> Self {
        Self::build(draft, approved)
    }

    fn build(draft: ItemDraft, approved: bool) -> Self {
        Self {
            id: ItemId::new(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            found_location: Some(draft.found_location),
            found_date: draft.found_date,
            status: ItemStatus::InStock,
            approved,
            created_at: Utc::now(),
        }
    }

    /// Forces the status to `Returned`, whatever it was before.
    ///
    /// Idempotent; "removing" an item is always modeled this way so the
    /// record survives for history.
    pub fn mark_returned(&mut self) {
        self.status = ItemStatus::Returned;
    }

    /// Forces the status back to `InStock`, whatever it was before.
    ///
    /// This is the manual staff correction path, e.g. after approving the
    /// wrong claim or returning an item by mistake.
    pub fn back_to_stock(&mut self) {
        self.status = ItemStatus::InStock;
    }

    /// Marks the parent of an approved claim.
    pub fn mark_claimed(&mut self) {
        self.status = ItemStatus::Claimed;
    }

    /// Whether the item shows up on the public listing.
    ///
    /// The approval flag gates public visibility only; staff always see
    /// every item.
    pub fn is_publicly_visible(&self) -> bool {
        self.approved && self.status == ItemStatus::InStock
    }

    /// Applies a validated partial update.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.found_location {
            self.found_location = Some(location);
        }
        if let Some(date) = patch.found_date {
            self.found_date = date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(approved) = patch.approved {
            self.approved = approved;
        }
    }
}

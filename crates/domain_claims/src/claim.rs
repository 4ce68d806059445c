//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, ItemId};

use crate::draft::ClaimDraft;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Waiting for staff review
    #[serde(rename = "Pendente")]
    Pending,
    /// Staff validated the claimant's ownership
    #[serde(rename = "Aprovada")]
    Approved,
    /// Staff rejected the claim
    #[serde(rename = "Recusada")]
    Rejected,
}

impl ClaimStatus {
    /// The label used on the wire and in the database
    pub fn wire_name(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pendente",
            ClaimStatus::Approved => "Aprovada",
            ClaimStatus::Rejected => "Recusada",
        }
    }

    /// Parses a wire label, rejecting anything outside the closed set
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "Pendente" => Some(ClaimStatus::Pending),
            "Aprovada" => Some(ClaimStatus::Approved),
            "Recusada" => Some(ClaimStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// The claimant's relationship with the institution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Affiliation {
    #[serde(rename = "Estudante")]
    Student,
    #[serde(rename = "Servidor")]
    Staff,
    #[serde(rename = "Terceirizado")]
    Contractor,
    #[serde(rename = "Visitante")]
    Visitor,
    #[serde(rename = "Outro")]
    Other,
}

impl Affiliation {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Affiliation::Student => "Estudante",
            Affiliation::Staff => "Servidor",
            Affiliation::Contractor => "Terceirizado",
            Affiliation::Visitor => "Visitante",
            Affiliation::Other => "Outro",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "Estudante" => Some(Affiliation::Student),
            "Servidor" => Some(Affiliation::Staff),
            "Terceirizado" => Some(Affiliation::Contractor),
            "Visitante" => Some(Affiliation::Visitor),
            "Outro" => Some(Affiliation::Other),
            _ => None,
        }
    }
}

/// An ownership claim against a found item
///
/// Claims belong to exactly one item and cannot outlive it; removing the
/// item removes its claims with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Parent item
    pub item_id: ItemId,
    /// Claimant's name
    pub claimant_name: String,
    /// Claimant's relationship with the institution
    pub affiliation: Option<Affiliation>,
    /// Registration number, badge id or similar; empty when not given
    pub identifier: String,
    /// E-mail or phone; empty when not given
    pub contact: String,
    /// Free-text proof of ownership
    pub details: String,
    /// Resolution status
    pub status: ClaimStatus,
    /// Submission timestamp, set once
    pub submitted_at: DateTime<Utc>,
}

impl Claim {
    /// Registers a claim submitted against an existing item.
    ///
    /// Every claim starts `Pending`; only staff resolution moves it.
    pub fn submitted(item_id: ItemId, draft: ClaimDraft) -> Self {
        Self {
            id: ClaimId::new(),
            item_id,
            claimant_name: draft.claimant_name,
            affiliation: draft.affiliation,
            identifier: draft.identifier,
            contact: draft.contact,
            details: draft.details,
            status: ClaimStatus::Pending,
            submitted_at: Utc::now(),
        }
    }
}

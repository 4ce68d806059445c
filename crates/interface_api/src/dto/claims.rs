//! Claim DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ClaimId, ItemId};
use domain_claims::{Affiliation, Claim, ClaimStatus};
use domain_items::{Item, ItemStatus};
use infra_db::{ClaimWithItem, ItemSummary};

/// Blind-claim submission body
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClaimRequest {
    #[validate(length(max = 120))]
    pub nome: Option<String>,
    pub vinculo: Option<String>,
    #[validate(length(max = 50))]
    pub identificacao: Option<String>,
    #[validate(length(max = 120))]
    pub contato: Option<String>,
    pub detalhes: Option<String>,
}

/// Staff resolution body
#[derive(Debug, Deserialize)]
pub struct UpdateClaimStatusRequest {
    pub status: Option<String>,
}

/// Acknowledgement for a claim submission
#[derive(Debug, Serialize)]
pub struct ClaimCreatedResponse {
    pub id: ClaimId,
    pub mensagem: String,
}

/// Parent-item summary nested in the internal claims listing
#[derive(Debug, Serialize)]
pub struct ClaimItemResponse {
    pub id: ItemId,
    pub nome: String,
    pub local_encontrado: String,
    pub data_encontrado: NaiveDate,
    pub status: ItemStatus,
    pub aprovado: bool,
}

impl From<ItemSummary> for ClaimItemResponse {
    fn from(item: ItemSummary) -> Self {
        Self {
            id: item.id,
            nome: item.name,
            local_encontrado: item.found_location.unwrap_or_default(),
            data_encontrado: item.found_date,
            status: item.status,
            aprovado: item.approved,
        }
    }
}

/// Internal claims-listing entry with the parent item inlined
#[derive(Debug, Serialize)]
pub struct ClaimWithItemResponse {
    pub id: ClaimId,
    pub status: ClaimStatus,
    pub data_envio: DateTime<Utc>,
    pub nome_requerente: String,
    pub vinculo: Option<Affiliation>,
    pub identificacao: String,
    pub contato: String,
    pub detalhes: String,
    pub item: ClaimItemResponse,
}

impl From<ClaimWithItem> for ClaimWithItemResponse {
    fn from(entry: ClaimWithItem) -> Self {
        let ClaimWithItem { claim, item } = entry;
        Self {
            id: claim.id,
            status: claim.status,
            data_envio: claim.submitted_at,
            nome_requerente: claim.claimant_name,
            vinculo: claim.affiliation,
            identificacao: claim.identifier,
            contato: claim.contact,
            detalhes: claim.details,
            item: item.into(),
        }
    }
}

/// Result of a staff resolution, echoing the cascade outcome
#[derive(Debug, Serialize)]
pub struct ClaimResolvedResponse {
    pub id: ClaimId,
    pub status: ClaimStatus,
    pub item_status: ItemStatus,
}

impl ClaimResolvedResponse {
    pub fn new(claim: &Claim, item: &Item) -> Self {
        Self {
            id: claim.id,
            status: claim.status,
            item_status: item.status,
        }
    }
}

//! Item DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::ItemId;
use domain_items::{Item, ItemStatus};

use super::{loose_bool, loose_bool_opt};

/// Public submission body (English wire shape)
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePublicItemRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
    pub date: Option<String>,
}

/// Staff item entry body (Portuguese wire shape)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInternalItemRequest {
    #[validate(length(max = 100))]
    pub nome: Option<String>,
    #[validate(length(max = 100))]
    pub local_encontrado: Option<String>,
    pub data_encontrado: Option<String>,
    #[validate(length(max = 50))]
    pub categoria: Option<String>,
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub aprovado: bool,
}

/// Staff partial-update body; every field optional
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(max = 100))]
    pub nome: Option<String>,
    #[validate(length(max = 100))]
    pub local_encontrado: Option<String>,
    pub data_encontrado: Option<String>,
    #[validate(length(max = 50))]
    pub categoria: Option<String>,
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "loose_bool_opt")]
    pub aprovado: Option<bool>,
}

/// Public listing entry
///
/// Optional text fields flatten to empty strings, which is what the
/// existing front-end expects.
#[derive(Debug, Serialize)]
pub struct PublicItemResponse {
    pub id: ItemId,
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub status: ItemStatus,
}

impl From<Item> for PublicItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            location: item.found_location.unwrap_or_default(),
            date: item.found_date,
            category: item.category.unwrap_or_default(),
            description: item.description.unwrap_or_default(),
            status: item.status,
        }
    }
}

/// Internal listing entry, including the approval flag
#[derive(Debug, Serialize)]
pub struct InternalItemResponse {
    pub id: ItemId,
    pub nome: String,
    pub descricao: String,
    pub categoria: String,
    pub local_encontrado: String,
    pub data_encontrado: NaiveDate,
    pub status: ItemStatus,
    pub aprovado: bool,
    pub data_criacao: DateTime<Utc>,
}

impl From<Item> for InternalItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            nome: item.name,
            descricao: item.description.unwrap_or_default(),
            categoria: item.category.unwrap_or_default(),
            local_encontrado: item.found_location.unwrap_or_default(),
            data_encontrado: item.found_date,
            status: item.status,
            aprovado: item.approved,
            data_criacao: item.created_at,
        }
    }
}

/// Acknowledgement for a public submission
#[derive(Debug, Serialize)]
pub struct ItemCreatedResponse {
    pub id: ItemId,
    pub nome: String,
    pub mensagem: String,
}

/// Acknowledgement for MarkReturned
#[derive(Debug, Serialize)]
pub struct ItemReturnedResponse {
    pub status: String,
    pub new_status: ItemStatus,
}

/// Acknowledgement for BackToStock
#[derive(Debug, Serialize)]
pub struct ItemStatusResponse {
    pub id: ItemId,
    pub status: ItemStatus,
}

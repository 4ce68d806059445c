//! Item handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use domain_items::{Item, ItemDraft, ItemPatch, ItemStatus};
use infra_db::ItemsRepository;

use crate::dto::items::*;
use crate::{error::ApiError, AppState};

/// Lists approved, in-stock items for the public site
pub async fn list_public(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicItemResponse>>, ApiError> {
    let items = ItemsRepository::new(state.pool).list_public().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Registers an item submitted through the public form.
///
/// Public submissions are always created unapproved and wait for staff
/// review before showing up on the listing.
pub async fn create_public(
    State(state): State<AppState>,
    Json(request): Json<CreatePublicItemRequest>,
) -> Result<(StatusCode, Json<ItemCreatedResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let draft = ItemDraft::new(
        request.name.as_deref(),
        request.location.as_deref(),
        request.date.as_deref(),
    )?;
    let item = Item::submitted(draft);

    ItemsRepository::new(state.pool).insert(&item).await?;
    tracing::info!(item_id = %item.id, "item submitted for review");

    let response = ItemCreatedResponse {
        id: item.id,
        nome: item.name,
        mensagem: "Item criado e aguardando aprovação interna.".to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Marks an item as returned to its owner.
///
/// Unconditional and idempotent; the record is kept for history instead of
/// being deleted.
pub async fn mark_returned(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<ItemReturnedResponse>, ApiError> {
    let item = ItemsRepository::new(state.pool)
        .set_status(item_id.into(), ItemStatus::Returned)
        .await?;

    Ok(Json(ItemReturnedResponse {
        status: "ok".to_string(),
        new_status: item.status,
    }))
}

/// Reverts an item to in-stock, the manual correction path after a wrong
/// approval or return.
pub async fn back_to_stock(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<ItemStatusResponse>, ApiError> {
    let item = ItemsRepository::new(state.pool)
        .set_status(item_id.into(), ItemStatus::InStock)
        .await?;

    Ok(Json(ItemStatusResponse {
        id: item.id,
        status: item.status,
    }))
}

/// Lists every item for the internal panel, approval flag included
pub async fn list_internal(
    State(state): State<AppState>,
) -> Result<Json<Vec<InternalItemResponse>>, ApiError> {
    let items = ItemsRepository::new(state.pool).list_all().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Registers an item entered by staff, honoring the explicit approval flag
pub async fn create_internal(
    State(state): State<AppState>,
    Json(request): Json<CreateInternalItemRequest>,
) -> Result<(StatusCode, Json<InternalItemResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let draft = ItemDraft::new(
        request.nome.as_deref(),
        request.local_encontrado.as_deref(),
        request.data_encontrado.as_deref(),
    )?
    .with_category(request.categoria.as_deref())
    .with_description(request.descricao.as_deref());
    let item = Item::registered(draft, request.aprovado);

    ItemsRepository::new(state.pool).insert(&item).await?;
    tracing::info!(item_id = %item.id, approved = item.approved, "item registered by staff");

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// Applies a partial update to an item.
///
/// Validation happens before the read-modify-write, so a malformed date
/// leaves the stored record untouched.
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(request): Json<UpdateItemRequest>,
) -> Result<Json<InternalItemResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let patch = ItemPatch::from_fields(
        request.nome.as_deref(),
        request.local_encontrado.as_deref(),
        request.data_encontrado.as_deref(),
        request.categoria.as_deref(),
        request.descricao.as_deref(),
        request.aprovado,
    )?;

    let repo = ItemsRepository::new(state.pool);
    let mut item = repo.get(item_id.into()).await?;
    item.apply(patch);
    repo.update(&item).await?;

    Ok(Json(item.into()))
}

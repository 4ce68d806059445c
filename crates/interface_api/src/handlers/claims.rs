//! Claim handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use domain_claims::{resolve_status_change, Claim, ClaimDraft, ClaimStatus};
use infra_db::{ClaimsRepository, ItemsRepository};

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Registers a blind claim against an existing item.
///
/// The claimant only ever saw the public summary; the free-text details
/// are what staff compare against the stored record.
pub async fn create_claim(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<ClaimCreatedResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    // The parent item must exist before anything is validated further;
    // claims cannot be filed against unknown ids.
    let item = ItemsRepository::new(state.pool.clone())
        .get(item_id.into())
        .await?;

    let draft = ClaimDraft::new(request.nome.as_deref(), request.detalhes.as_deref())?
        .with_affiliation(request.vinculo.as_deref())?
        .with_identifier(request.identificacao.as_deref())
        .with_contact(request.contato.as_deref());
    let claim = Claim::submitted(item.id, draft);

    ClaimsRepository::new(state.pool).insert(&claim).await?;
    tracing::info!(claim_id = %claim.id, item_id = %item.id, "claim submitted");

    let response = ClaimCreatedResponse {
        id: claim.id,
        mensagem: "Reivindicação registrada e enviada para análise da equipe interna.".to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists every claim with its parent item inlined, for the internal panel
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimWithItemResponse>>, ApiError> {
    let entries = ClaimsRepository::new(state.pool).list_with_items().await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Resolves a claim from the internal panel.
///
/// Approving cascades the parent item to claimed inside the same
/// transaction; rejecting leaves the item exactly as it was.
pub async fn update_claim_status(
    State(state): State<AppState>,
    Path(claim_id): Path<Uuid>,
    Json(request): Json<UpdateClaimStatusRequest>,
) -> Result<Json<ClaimResolvedResponse>, ApiError> {
    let raw = request.status.unwrap_or_default();
    let status = ClaimStatus::from_wire(&raw)
        .ok_or_else(|| ApiError::Validation(format!("Unknown claim status: {raw}")))?;

    let outcome = resolve_status_change(status);
    let (claim, item) = ClaimsRepository::new(state.pool)
        .resolve(claim_id.into(), outcome)
        .await?;

    tracing::info!(
        claim_id = %claim.id,
        status = %claim.status,
        item_status = %item.status,
        "claim resolved"
    );

    Ok(Json(ClaimResolvedResponse::new(&claim, &item)))
}

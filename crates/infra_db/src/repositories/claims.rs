//! Claims repository implementation
//!
//! Database access for ownership claims: intake, the internal review
//! listing, and staff resolution. Resolution is the one multi-statement
//! operation in the system: the claim update and the item cascade commit
//! inside a single transaction so the rule in
//! `domain_claims::resolution` is applied atomically.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{ClaimId, ItemId};
use domain_claims::{Claim, ResolutionOutcome};
use domain_items::Item;

use crate::error::DatabaseError;
use crate::repositories::items::{ItemRow, ItemStatus};

const CLAIM_COLUMNS: &str = "claim_id, item_id, claimant_name, affiliation, identifier, \
     contact, details, status, submitted_at";

/// Repository for managing claim records
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a claim by its identifier, or NotFound.
    pub async fn get(&self, claim_id: ClaimId) -> Result<Claim, DatabaseError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = $1");
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(Uuid::from(claim_id))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        Ok(row.into())
    }

    /// Inserts a fully-built claim record.
    pub async fn insert(&self, claim: &Claim) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO claims (claim_id, item_id, claimant_name, affiliation, \
             identifier, contact, details, status, submitted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(Uuid::from(claim.id))
        .bind(Uuid::from(claim.item_id))
        .bind(&claim.claimant_name)
        .bind(claim.affiliation.map(Affiliation::from))
        .bind(&claim.identifier)
        .bind(&claim.contact)
        .bind(&claim.details)
        .bind(ClaimStatus::from(claim.status))
        .bind(claim.submitted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists every claim with its parent item's summary fields inlined,
    /// most recently submitted first.
    pub async fn list_with_items(&self) -> Result<Vec<ClaimWithItem>, DatabaseError> {
        let rows = sqlx::query_as::<_, ClaimWithItemRow>(
            "SELECT c.claim_id, c.item_id, c.claimant_name, c.affiliation, c.identifier, \
             c.contact, c.details, c.status, c.submitted_at, \
             i.name AS item_name, i.found_location AS item_found_location, \
             i.found_date AS item_found_date, i.status AS item_status, \
             i.approved AS item_approved \
             FROM claims c \
             JOIN items i ON i.item_id = c.item_id \
             ORDER BY c.submitted_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ClaimWithItem::from).collect())
    }

    /// Applies a resolution decided by the domain layer: updates the claim
    /// status and, when the cascade fires, forces the parent item's status
    /// in the same transaction. Returns both updated records.
    pub async fn resolve(
        &self,
        claim_id: ClaimId,
        outcome: ResolutionOutcome,
    ) -> Result<(Claim, Item), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let claim_sql =
            format!("UPDATE claims SET status = $2 WHERE claim_id = $1 RETURNING {CLAIM_COLUMNS}");
        let claim_row = sqlx::query_as::<_, ClaimRow>(&claim_sql)
            .bind(Uuid::from(claim_id))
            .bind(ClaimStatus::from(outcome.claim_status))
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        let item_row = match outcome.item_status {
            Some(status) => {
                sqlx::query_as::<_, ItemRow>(
                    "UPDATE items SET status = $2 WHERE item_id = $1 \
                     RETURNING item_id, name, description, category, found_location, \
                     found_date, status, approved, created_at",
                )
                .bind(claim_row.item_id)
                .bind(ItemStatus::from(status))
                .fetch_one(&mut *tx)
                .await?
            }
            None => {
                sqlx::query_as::<_, ItemRow>(
                    "SELECT item_id, name, description, category, found_location, \
                     found_date, status, approved, created_at \
                     FROM items WHERE item_id = $1",
                )
                .bind(claim_row.item_id)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;
        Ok((claim_row.into(), item_row.into()))
    }
}

/// Claim status as stored in PostgreSQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "claim_status")]
pub enum ClaimStatus {
    #[sqlx(rename = "Pendente")]
    Pending,
    #[sqlx(rename = "Aprovada")]
    Approved,
    #[sqlx(rename = "Recusada")]
    Rejected,
}

impl From<domain_claims::ClaimStatus> for ClaimStatus {
    fn from(status: domain_claims::ClaimStatus) -> Self {
        match status {
            domain_claims::ClaimStatus::Pending => ClaimStatus::Pending,
            domain_claims::ClaimStatus::Approved => ClaimStatus::Approved,
            domain_claims::ClaimStatus::Rejected => ClaimStatus::Rejected,
        }
    }
}

impl From<ClaimStatus> for domain_claims::ClaimStatus {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Pending => domain_claims::ClaimStatus::Pending,
            ClaimStatus::Approved => domain_claims::ClaimStatus::Approved,
            ClaimStatus::Rejected => domain_claims::ClaimStatus::Rejected,
        }
    }
}

/// Claimant affiliation as stored in PostgreSQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "claim_affiliation")]
pub enum Affiliation {
    #[sqlx(rename = "Estudante")]
    Student,
    #[sqlx(rename = "Servidor")]
    Staff,
    #[sqlx(rename = "Terceirizado")]
    Contractor,
    #[sqlx(rename = "Visitante")]
    Visitor,
    #[sqlx(rename = "Outro")]
    Other,
}

impl From<domain_claims::Affiliation> for Affiliation {
    fn from(affiliation: domain_claims::Affiliation) -> Self {
        match affiliation {
            domain_claims::Affiliation::Student => Affiliation::Student,
            domain_claims::Affiliation::Staff => Affiliation::Staff,
            domain_claims::Affiliation::Contractor => Affiliation::Contractor,
            domain_claims::Affiliation::Visitor => Affiliation::Visitor,
            domain_claims::Affiliation::Other => Affiliation::Other,
        }
    }
}

impl From<Affiliation> for domain_claims::Affiliation {
    fn from(affiliation: Affiliation) -> Self {
        match affiliation {
            Affiliation::Student => domain_claims::Affiliation::Student,
            Affiliation::Staff => domain_claims::Affiliation::Staff,
            Affiliation::Contractor => domain_claims::Affiliation::Contractor,
            Affiliation::Visitor => domain_claims::Affiliation::Visitor,
            Affiliation::Other => domain_claims::Affiliation::Other,
        }
    }
}

/// Database row for a claim
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub claim_id: Uuid,
    pub item_id: Uuid,
    pub claimant_name: String,
    pub affiliation: Option<Affiliation>,
    pub identifier: String,
    pub contact: String,
    pub details: String,
    pub status: ClaimStatus,
    pub submitted_at: DateTime<Utc>,
}

impl From<ClaimRow> for Claim {
    fn from(row: ClaimRow) -> Self {
        Claim {
            id: row.claim_id.into(),
            item_id: row.item_id.into(),
            claimant_name: row.claimant_name,
            affiliation: row.affiliation.map(domain_claims::Affiliation::from),
            identifier: row.identifier,
            contact: row.contact,
            details: row.details,
            status: row.status.into(),
            submitted_at: row.submitted_at,
        }
    }
}

/// The parent-item fields inlined into the internal claims listing
#[derive(Debug, Clone)]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
    pub found_location: Option<String>,
    pub found_date: NaiveDate,
    pub status: domain_items::ItemStatus,
    pub approved: bool,
}

/// A claim joined with its parent item's summary
#[derive(Debug, Clone)]
pub struct ClaimWithItem {
    pub claim: Claim,
    pub item: ItemSummary,
}

/// Database row for the claims-with-items join
#[derive(Debug, Clone, sqlx::FromRow)]
struct ClaimWithItemRow {
    claim_id: Uuid,
    item_id: Uuid,
    claimant_name: String,
    affiliation: Option<Affiliation>,
    identifier: String,
    contact: String,
    details: String,
    status: ClaimStatus,
    submitted_at: DateTime<Utc>,
    item_name: String,
    item_found_location: Option<String>,
    item_found_date: NaiveDate,
    item_status: ItemStatus,
    item_approved: bool,
}

impl From<ClaimWithItemRow> for ClaimWithItem {
    fn from(row: ClaimWithItemRow) -> Self {
        ClaimWithItem {
            claim: Claim {
                id: row.claim_id.into(),
                item_id: row.item_id.into(),
                claimant_name: row.claimant_name,
                affiliation: row.affiliation.map(domain_claims::Affiliation::from),
                identifier: row.identifier,
                contact: row.contact,
                details: row.details,
                status: row.status.into(),
                submitted_at: row.submitted_at,
            },
            item: ItemSummary {
                id: row.item_id.into(),
                name: row.item_name,
                found_location: row.item_found_location,
                found_date: row.item_found_date,
                status: row.item_status.into(),
                approved: row.item_approved,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion_roundtrip() {
        for status in [
            domain_claims::ClaimStatus::Pending,
            domain_claims::ClaimStatus::Approved,
            domain_claims::ClaimStatus::Rejected,
        ] {
            let row_status = ClaimStatus::from(status);
            assert_eq!(domain_claims::ClaimStatus::from(row_status), status);
        }
    }

    #[test]
    fn test_affiliation_conversion_roundtrip() {
        for affiliation in [
            domain_claims::Affiliation::Student,
            domain_claims::Affiliation::Staff,
            domain_claims::Affiliation::Contractor,
            domain_claims::Affiliation::Visitor,
            domain_claims::Affiliation::Other,
        ] {
            let row_affiliation = Affiliation::from(affiliation);
            assert_eq!(
                domain_claims::Affiliation::from(row_affiliation),
                affiliation
            );
        }
    }
}

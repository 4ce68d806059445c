//! Items repository implementation
//!
//! Database access for found items: public and internal listings, creation,
//! partial updates, and the unconditional status forces.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::ItemId;
use domain_items::Item;

use crate::error::DatabaseError;

const ITEM_COLUMNS: &str = "item_id, name, description, category, found_location, \
     found_date, status, approved, created_at";

/// Repository for managing item records
#[derive(Debug, Clone)]
pub struct ItemsRepository {
    pool: PgPool,
}

impl ItemsRepository {
    /// Creates a new ItemsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves an item by its identifier, or NotFound.
    pub async fn get(&self, item_id: ItemId) -> Result<Item, DatabaseError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE item_id = $1");
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(Uuid::from(item_id))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Item", item_id))?;

        Ok(row.into())
    }

    /// Lists the items visible on the public site: in stock and approved,
    /// most recently found (then most recently registered) first.
    pub async fn list_public(&self) -> Result<Vec<Item>, DatabaseError> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE status = $1 AND approved \
             ORDER BY found_date DESC, created_at DESC"
        );
        let rows = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(ItemStatus::InStock)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    /// Lists every item regardless of status or approval, same ordering as
    /// the public listing. Staff-side filtering happens in the client.
    pub async fn list_all(&self) -> Result<Vec<Item>, DatabaseError> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             ORDER BY found_date DESC, created_at DESC"
        );
        let rows = sqlx::query_as::<_, ItemRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    /// Inserts a fully-built item record.
    pub async fn insert(&self, item: &Item) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO items (item_id, name, description, category, found_location, \
             found_date, status, approved, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(Uuid::from(item.id))
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.category)
        .bind(&item.found_location)
        .bind(item.found_date)
        .bind(ItemStatus::from(item.status))
        .bind(item.approved)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Writes back every mutable field of an item.
    ///
    /// The caller applies the patch in the domain layer first; overlapping
    /// concurrent updates are last-write-wins by design.
    pub async fn update(&self, item: &Item) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE items SET name = $2, description = $3, category = $4, \
             found_location = $5, found_date = $6, status = $7, approved = $8 \
             WHERE item_id = $1",
        )
        .bind(Uuid::from(item.id))
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.category)
        .bind(&item.found_location)
        .bind(item.found_date)
        .bind(ItemStatus::from(item.status))
        .bind(item.approved)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Item", item.id));
        }
        Ok(())
    }

    /// Forces an item's status (MarkReturned / BackToStock), returning the
    /// updated record.
    pub async fn set_status(
        &self,
        item_id: ItemId,
        status: domain_items::ItemStatus,
    ) -> Result<Item, DatabaseError> {
        let sql = format!(
            "UPDATE items SET status = $2 WHERE item_id = $1 RETURNING {ITEM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(Uuid::from(item_id))
            .bind(ItemStatus::from(status))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Item", item_id))?;

        Ok(row.into())
    }
}

/// Item status as stored in PostgreSQL
///
/// The enum labels in the database are the wire strings themselves, so the
/// renames here must stay in lockstep with the migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "item_status")]
pub enum ItemStatus {
    #[sqlx(rename = "Em estoque")]
    InStock,
    #[sqlx(rename = "Reivindicado")]
    Claimed,
    #[sqlx(rename = "Devolvido")]
    Returned,
}

impl From<domain_items::ItemStatus> for ItemStatus {
    fn from(status: domain_items::ItemStatus) -> Self {
        match status {
            domain_items::ItemStatus::InStock => ItemStatus::InStock,
            domain_items::ItemStatus::Claimed => ItemStatus::Claimed,
            domain_items::ItemStatus::Returned => ItemStatus::Returned,
        }
    }
}

impl From<ItemStatus> for domain_items::ItemStatus {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::InStock => domain_items::ItemStatus::InStock,
            ItemStatus::Claimed => domain_items::ItemStatus::Claimed,
            ItemStatus::Returned => domain_items::ItemStatus::Returned,
        }
    }
}

/// Database row for an item
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ItemRow {
    pub item_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub found_location: Option<String>,
    pub found_date: NaiveDate,
    pub status: ItemStatus,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.item_id.into(),
            name: row.name,
            description: row.description,
            category: row.category,
            found_location: row.found_location,
            found_date: row.found_date,
            status: row.status.into(),
            approved: row.approved,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion_roundtrip() {
        for status in [
            domain_items::ItemStatus::InStock,
            domain_items::ItemStatus::Claimed,
            domain_items::ItemStatus::Returned,
        ] {
            let row_status = ItemStatus::from(status);
            assert_eq!(domain_items::ItemStatus::from(row_status), status);
        }
    }
}

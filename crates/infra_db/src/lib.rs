//! Infrastructure Database Layer
//!
//! This crate provides PostgreSQL persistence for the lost-and-found
//! system using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: `ItemsRepository` and
//! `ClaimsRepository` hide the SQL behind methods shaped after the domain
//! operations. Each request performs a single read-modify-write; the only
//! multi-statement unit is the claim-resolution cascade, which runs inside
//! one transaction.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, ItemsRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/lostfound")).await?;
//! let repo = ItemsRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::claims::{ClaimsRepository, ClaimWithItem, ItemSummary};
pub use repositories::items::ItemsRepository;

/// Embedded schema migrations, applied at server startup
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

//! Persistence seams for profiles, the equipment catalog, and ownership.
//!
//! The engine consumes these as opaque collaborators; the concrete
//! backends are the sqlite implementation and an in-memory double for
//! tests and local development.

use crate::domain::{EquipmentDefinition, OwnershipRecord, Profile, UserId};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Error type shared by every store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("malformed row: {0}")]
    Malformed(String),
}

/// Persistent profile rows.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, user: &UserId) -> Result<Option<Profile>, StoreError>;

    /// Insert a fresh profile. Callers check for an existing row first;
    /// a lost race surfaces as a database error.
    async fn insert(&self, profile: &Profile) -> Result<(), StoreError>;

    /// Write back every mutable field of the profile in one statement.
    async fn update(&self, profile: &Profile) -> Result<(), StoreError>;

    async fn delete(&self, user: &UserId) -> Result<(), StoreError>;
}

/// Immutable catalog of equipment definitions.
#[async_trait]
pub trait EquipmentCatalog: Send + Sync {
    /// Fetch the definitions for the given display names. Unknown names
    /// are silently absent from the result.
    async fn find_by_names(&self, names: &[String])
        -> Result<Vec<EquipmentDefinition>, StoreError>;
}

/// Per-user item ownership rows.
#[async_trait]
pub trait OwnershipStore: Send + Sync {
    /// All records owned by `user`, in grant order.
    async fn list_for_user(&self, user: &UserId) -> Result<Vec<OwnershipRecord>, StoreError>;

    async fn set_equipped(&self, id: Uuid, equipped: bool) -> Result<(), StoreError>;

    async fn bulk_set_equipped(&self, ids: &[Uuid], equipped: bool) -> Result<(), StoreError>;

    /// Grant one unequipped record per item name to `user`.
    async fn insert(&self, user: &UserId, item_names: &[String]) -> Result<(), StoreError>;

    /// Remove every record owned by `user`.
    async fn delete_for_user(&self, user: &UserId) -> Result<(), StoreError>;
}

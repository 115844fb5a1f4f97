// File: src/store/mod.rs
// Purpose: Item persistence behind a trait, with in-memory and SQL backends

use crate::item::Item;
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod sql;

pub use memory::MemoryItemStore;
pub use sql::SqlItemStore;

/// Failures raised by an [`ItemStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored item is corrupt: {0}")]
    Corrupt(String),
}

/// Create/read/update access to items.
///
/// Implementations own their own locking; callers only ever hand over items
/// that already passed validation.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, ordered by id
    async fn find_all(&self) -> Result<Vec<Item>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError>;

    /// Persist a new item and return it with its assigned id
    async fn save(&self, item: Item) -> Result<Item, StoreError>;

    /// Replace name, price and quantity of an existing item
    async fn update(&self, id: i64, item: Item) -> Result<(), StoreError>;
}

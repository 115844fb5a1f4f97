// File: src/store/memory.rs
// Purpose: In-process item store guarded by a tokio RwLock

use super::{ItemStore, StoreError};
use crate::item::Item;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct State {
    items: BTreeMap<i64, Item>,
    sequence: i64,
}

/// Process-local store; ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    state: RwLock<State>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.items.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.state.read().await.items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError> {
        Ok(self.state.read().await.items.get(&id).cloned())
    }

    async fn save(&self, item: Item) -> Result<Item, StoreError> {
        let mut state = self.state.write().await;
        state.sequence += 1;
        let id = state.sequence;
        let saved = Item {
            id: Some(id),
            ..item
        };
        state.items.insert(id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, id: i64, item: Item) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let existing = state.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        existing.name = item.name;
        existing.price = item.price;
        existing.quantity = item.quantity;
        Ok(())
    }
}

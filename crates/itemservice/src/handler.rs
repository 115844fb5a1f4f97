// File: src/handler.rs
// Purpose: Bind, validate and persist submitted items

use crate::item::{Item, ItemForm};
use crate::store::{ItemStore, StoreError};
use crate::validation::{BindingResult, Validate};
use std::sync::Arc;

/// Outcome of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Persisted under `id`
    Saved { id: i64, item: Item },
    /// Not persisted; the form is shown again with these errors
    Rejected { item: Item, errors: BindingResult },
}

impl Submission {
    pub fn is_saved(&self) -> bool {
        matches!(self, Submission::Saved { .. })
    }
}

/// Bind the raw form and run item validation.
///
/// Conversion errors come first, followed by rule violations.
pub fn check(form: &ItemForm) -> (Item, BindingResult) {
    let (item, mut errors) = form.bind();
    errors.extend(item.validate());
    (item, errors)
}

/// Orchestrates item requests against an [`ItemStore`]
#[derive(Clone)]
pub struct ItemHandler {
    store: Arc<dyn ItemStore>,
}

impl ItemHandler {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Item>, StoreError> {
        self.store.find_all().await
    }

    pub async fn find(&self, id: i64) -> Result<Item, StoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    /// Create a new item if the submission is valid
    pub async fn submit(&self, form: &ItemForm) -> Result<Submission, StoreError> {
        let (item, errors) = check(form);
        if errors.has_errors() {
            tracing::info!(%errors, "item submission rejected");
            return Ok(Submission::Rejected { item, errors });
        }

        let saved = self.store.save(item).await?;
        let id = saved
            .id
            .ok_or_else(|| StoreError::Corrupt("store returned an item without an id".into()))?;
        tracing::info!(id, "item saved");
        Ok(Submission::Saved { id, item: saved })
    }

    /// Update an existing item if the submission is valid
    pub async fn edit(&self, id: i64, form: &ItemForm) -> Result<Submission, StoreError> {
        self.find(id).await?;

        let (mut item, errors) = check(form);
        item.id = Some(id);
        if errors.has_errors() {
            tracing::info!(id, %errors, "item edit rejected");
            return Ok(Submission::Rejected { item, errors });
        }

        self.store.update(id, item.clone()).await?;
        tracing::info!(id, "item updated");
        Ok(Submission::Saved { id, item })
    }
}

//! Category business logic - A flat set of user-defined product labels.
//!
//! Labels are unique after whitespace trimming, compared case-sensitively.
//! Removing a label does not touch the products referencing it; callers clear
//! those references on the catalog themselves (see `App::remove_category`).

use crate::{
    errors::Result,
    storage::{self, KeyValueStorage, keys},
};
use std::sync::Arc;

/// Category label store.
pub struct CategoryStore {
    storage: Arc<dyn KeyValueStorage>,
    categories: Vec<String>,
}

impl CategoryStore {
    /// Opens the store, loading the persisted label list. A missing or
    /// corrupt list loads as empty.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let categories: Vec<String> =
            storage::load_json_or_default(storage.as_ref(), keys::CATEGORIES);
        tracing::debug!(count = categories.len(), "loaded categories");
        Self { storage, categories }
    }

    /// All labels, in insertion order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Adds a label after trimming it. Returns `false` and changes nothing
    /// when the trimmed label is empty or already present.
    ///
    /// # Errors
    /// Returns an error if persisting the list fails.
    pub fn add(&mut self, label: &str) -> Result<bool> {
        let trimmed = label.trim();
        if trimmed.is_empty() || self.categories.iter().any(|c| c == trimmed) {
            return Ok(false);
        }

        self.categories.push(trimmed.to_string());
        self.persist()?;
        tracing::info!(label = trimmed, "category added");
        Ok(true)
    }

    /// Removes a label unconditionally. Removing an unknown label is a no-op.
    ///
    /// # Errors
    /// Returns an error if persisting the list fails.
    pub fn remove(&mut self, label: &str) -> Result<()> {
        self.categories.retain(|c| c != label);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        storage::store_json(self.storage.as_ref(), keys::CATEGORIES, &self.categories)
    }
}

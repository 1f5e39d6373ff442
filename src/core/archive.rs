//! Archive business logic - Finalized quotations, newest first.
//!
//! A quotation in the archive is a historical record: it embeds product
//! snapshots and a company profile copy, and the only permitted operations
//! are saving a new one and deleting an old one. There is no edit-in-place.

use crate::{
    errors::Result,
    models::{QuotationDraft, SavedQuotation, new_id},
    storage::{self, KeyValueStorage, keys},
};
use chrono::Utc;
use std::sync::Arc;

/// Archived quotation store.
pub struct ArchiveStore {
    storage: Arc<dyn KeyValueStorage>,
    quotations: Vec<SavedQuotation>,
}

impl ArchiveStore {
    /// Opens the archive, loading the persisted collection. A missing or
    /// corrupt collection loads as empty.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let quotations: Vec<SavedQuotation> =
            storage::load_json_or_default(storage.as_ref(), keys::SAVED_QUOTATIONS);
        tracing::debug!(count = quotations.len(), "loaded quotation archive");
        Self { storage, quotations }
    }

    /// All archived quotations, newest first.
    #[must_use]
    pub fn quotations(&self) -> &[SavedQuotation] {
        &self.quotations
    }

    /// Finds an archived quotation by its unique id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SavedQuotation> {
        self.quotations.iter().find(|q| q.id == id)
    }

    /// Finalizes a draft: assigns a fresh identifier and timestamp, prepends
    /// it to the archive so the newest entry comes first, and persists.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn save(&mut self, draft: QuotationDraft) -> Result<SavedQuotation> {
        let quotation = SavedQuotation::from_draft(draft, new_id(), Utc::now());

        self.quotations.insert(0, quotation.clone());
        self.persist()?;
        tracing::info!(
            id = %quotation.id,
            customer = %quotation.customer_name,
            total = %quotation.total,
            "quotation archived"
        );
        Ok(quotation)
    }

    /// Removes an archived quotation. Deleting an unknown id is a no-op.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.quotations.retain(|q| q.id != id);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        storage::store_json(self.storage.as_ref(), keys::SAVED_QUOTATIONS, &self.quotations)
    }
}

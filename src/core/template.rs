//! Template business logic - Reusable quotation skeletons.

use crate::{
    errors::{Error, Result},
    models::{QuotationTemplate, TemplateItem, new_id},
    storage::{self, KeyValueStorage, keys},
};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Quotation template store.
pub struct TemplateStore {
    storage: Arc<dyn KeyValueStorage>,
    templates: Vec<QuotationTemplate>,
}

impl TemplateStore {
    /// Opens the store, loading the persisted templates. A missing or corrupt
    /// collection loads as empty.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let templates: Vec<QuotationTemplate> =
            storage::load_json_or_default(storage.as_ref(), keys::TEMPLATES);
        tracing::debug!(count = templates.len(), "loaded quotation templates");
        Self { storage, templates }
    }

    /// All templates, in insertion order.
    #[must_use]
    pub fn templates(&self) -> &[QuotationTemplate] {
        &self.templates
    }

    /// Finds a template by its unique id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&QuotationTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Saves a new template with a fresh identifier and timestamp. The
    /// discount is clamped into [0, 100].
    ///
    /// # Errors
    /// Returns an error if:
    /// - The template name is empty or whitespace-only
    /// - Persisting the collection fails
    pub fn save(
        &mut self,
        name: &str,
        discount: Decimal,
        items: Vec<TemplateItem>,
    ) -> Result<QuotationTemplate> {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Template name cannot be empty".to_string(),
            });
        }

        let template = QuotationTemplate {
            id: new_id(),
            name: name.trim().to_string(),
            discount: discount.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
            items,
            created_at: Utc::now(),
        };

        self.templates.push(template.clone());
        self.persist()?;
        tracing::info!(id = %template.id, name = %template.name, "template saved");
        Ok(template)
    }

    /// Removes a template. Deleting an unknown id is a no-op.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.templates.retain(|t| t.id != id);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        storage::store_json(self.storage.as_ref(), keys::TEMPLATES, &self.templates)
    }
}

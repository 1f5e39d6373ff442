//! Application shell - Wires the stores over one shared storage handle and
//! hosts the operations that span more than one store.

use crate::{
    core::{
        ArchiveStore, CatalogStore, CategoryStore, CompanyStore, TemplateStore, quotation,
    },
    errors::{Error, Result},
    models::{QuotationItem, SavedQuotation, currency},
    render, storage,
    storage::{KeyValueStorage, keys},
    upload,
};
use chrono::{Local, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

const DEFAULT_CURRENCY: &str = "USD";

/// The assembled application: every store plus the currency preference.
pub struct App {
    storage: Arc<dyn KeyValueStorage>,
    /// Product catalog
    pub catalog: CatalogStore,
    /// Category labels
    pub categories: CategoryStore,
    /// Company profile
    pub company: CompanyStore,
    /// Reusable quotation templates
    pub templates: TemplateStore,
    /// Archived quotations
    pub archive: ArchiveStore,
    currency: String,
}

impl App {
    /// Builds the application over the given storage, loading every
    /// collection eagerly.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let currency: Option<String> =
            storage::load_json_or_default(storage.as_ref(), keys::SELECTED_CURRENCY);

        Self {
            catalog: CatalogStore::new(Arc::clone(&storage)),
            categories: CategoryStore::new(Arc::clone(&storage)),
            company: CompanyStore::new(Arc::clone(&storage)),
            templates: TemplateStore::new(Arc::clone(&storage)),
            archive: ArchiveStore::new(Arc::clone(&storage)),
            currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            storage,
        }
    }

    /// The preferred display currency code.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Sets the preferred display currency.
    ///
    /// # Errors
    /// Returns an error if the code is not in the supported currency table or
    /// persisting the preference fails.
    pub fn set_currency(&mut self, code: &str) -> Result<()> {
        if currency::find(code).is_none() {
            return Err(Error::Validation {
                message: format!("Unsupported currency code: {code}"),
            });
        }
        self.currency = code.to_string();
        storage::store_json(self.storage.as_ref(), keys::SELECTED_CURRENCY, &self.currency)
    }

    /// Removes a category label and clears it from every product referencing
    /// it. Returns how many products were touched. Products themselves are
    /// never deleted.
    ///
    /// # Errors
    /// Returns an error if persisting either collection fails.
    pub fn remove_category(&mut self, label: &str) -> Result<usize> {
        self.categories.remove(label)?;
        self.catalog.clear_category(label)
    }

    /// Finalizes a quotation: computes totals over the given items, snapshots
    /// the current company profile, and archives the result.
    ///
    /// The discount is clamped into [0, 100].
    ///
    /// # Errors
    /// Returns an error if the customer name is blank, an item quantity is
    /// zero, or persisting the archive fails.
    pub fn save_quotation(
        &mut self,
        customer_name: &str,
        items: Vec<QuotationItem>,
        discount_pct: Decimal,
    ) -> Result<SavedQuotation> {
        let draft = quotation::build_draft(
            customer_name,
            items,
            discount_pct,
            &self.currency,
            Some(self.company.info().clone()),
        )?;
        self.archive.save(draft)
    }

    /// Loads a template against the current catalog. Entries whose product no
    /// longer exists are dropped. Returns the resolved items and the
    /// template's discount, or `None` for an unknown template id.
    #[must_use]
    pub fn load_template(&self, template_id: &str) -> Option<(Vec<QuotationItem>, Decimal)> {
        let template = self.templates.get(template_id)?;
        let items = quotation::load_from_template(template, self.catalog.products());
        Some((items, template.discount))
    }

    /// Renders an archived quotation to PDF bytes, returning the download
    /// filename alongside. The company logo is fetched best-effort; export
    /// proceeds without it on any failure.
    ///
    /// # Errors
    /// Returns an error if the quotation id is unknown or PDF serialization
    /// fails.
    pub fn export_quotation(&self, id: &str) -> Result<(String, Vec<u8>)> {
        let (quotation, document) = self.lay_out(id)?;

        let logo = document.company.logo.as_deref().and_then(upload::fetch_image);
        let bytes = render::render_pdf(&document, logo.as_deref())?;
        let filename = render::export_filename(&quotation.customer_name, Utc::now());

        tracing::info!(id, filename, "quotation exported");
        Ok((filename, bytes))
    }

    /// Renders an archived quotation as the fixed-width print layout.
    ///
    /// # Errors
    /// Returns an error if the quotation id is unknown.
    pub fn print_quotation(&self, id: &str) -> Result<String> {
        let (_, document) = self.lay_out(id)?;
        Ok(render::render_text(&document))
    }

    fn lay_out(&self, id: &str) -> Result<(&SavedQuotation, render::QuotationDocument)> {
        let quotation = self
            .archive
            .get(id)
            .ok_or_else(|| Error::QuotationNotFound { id: id.to_string() })?;

        // Prefer the profile snapshot taken when the quotation was saved
        let company = quotation
            .company_info
            .clone()
            .unwrap_or_else(|| self.company.info().clone());

        let document = render::build_document(quotation, &company, Local::now().date_naive());
        Ok((quotation, document))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::models::ProductUpdate;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_defaults_to_usd() {
        let app = setup_app();
        assert_eq!(app.currency(), "USD");
    }

    #[test]
    fn test_set_currency_persists_and_validates() {
        let storage = memory_storage();
        let mut app = App::new(Arc::clone(&storage));

        app.set_currency("EUR").unwrap();
        assert_eq!(app.currency(), "EUR");

        let result = app.set_currency("NOPE");
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        assert_eq!(app.currency(), "EUR");

        // The preference survives a restart
        let reloaded = App::new(storage);
        assert_eq!(reloaded.currency(), "EUR");
    }

    #[test]
    fn test_remove_category_clears_product_references() {
        let mut app = setup_app();
        app.categories.add("Tools").unwrap();

        let mut ids = Vec::new();
        for name in ["Hammer", "Saw", "Drill"] {
            let product = app.catalog.add(product_input(name, dec!(10))).unwrap();
            app.catalog
                .update(
                    &product.id,
                    ProductUpdate {
                        category: Some(Some("Tools".to_string())),
                        ..ProductUpdate::default()
                    },
                )
                .unwrap();
            ids.push(product.id);
        }

        let cleared = app.remove_category("Tools").unwrap();

        assert_eq!(cleared, 3);
        assert!(app.categories.categories().is_empty());
        // The products still exist, just without the label
        assert_eq!(app.catalog.products().len(), 3);
        for id in &ids {
            assert_eq!(app.catalog.get(id).unwrap().category, None);
        }
    }

    #[test]
    fn test_save_quotation_snapshots_company_and_currency() {
        let mut app = setup_app();
        app.set_currency("EUR").unwrap();
        let product = app.catalog.add(product_input("Bolt", dec!(0.50))).unwrap();

        let saved = app
            .save_quotation("Acme", vec![quotation_item(product, 3)], dec!(10))
            .unwrap();

        assert_eq!(saved.currency, "EUR");
        assert_eq!(saved.subtotal, dec!(1.50));
        assert_eq!(saved.total, dec!(1.35));
        assert_eq!(saved.company_info.as_ref().unwrap().name, "Your Company Name");
        assert_eq!(app.archive.quotations().len(), 1);
    }

    #[test]
    fn test_load_template_resolves_against_current_catalog() {
        let mut app = setup_app();
        let bolt = app.catalog.add(product_input("Bolt", dec!(0.50))).unwrap();
        let nut = app.catalog.add(product_input("Nut", dec!(0.25))).unwrap();

        let template = app
            .templates
            .save(
                "Kit",
                dec!(5),
                vec![
                    crate::models::TemplateItem { product_id: bolt.id.clone(), quantity: 2 },
                    crate::models::TemplateItem { product_id: nut.id.clone(), quantity: 4 },
                ],
            )
            .unwrap();

        // Delete one referenced product: its entry drops out on load
        app.catalog.delete(&nut.id).unwrap();

        let (items, discount) = app.load_template(&template.id).unwrap();
        assert_eq!(discount, dec!(5));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product.id, bolt.id);
        assert_eq!(items[0].quantity, 2);

        assert!(app.load_template("no-such-template").is_none());
    }

    #[test]
    fn test_print_quotation_renders_document() {
        let mut app = setup_app();
        let product = app.catalog.add(product_input("Bolt", dec!(0.50))).unwrap();
        let saved = app
            .save_quotation("Acme", vec![quotation_item(product, 3)], dec!(0))
            .unwrap();

        let rendered = app.print_quotation(&saved.id).unwrap();
        assert!(rendered.contains("Customer: Acme"));
        assert!(rendered.contains("$1.50"));

        let result = app.print_quotation("missing");
        assert!(matches!(result.unwrap_err(), Error::QuotationNotFound { .. }));
    }
}

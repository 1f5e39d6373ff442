//! Catalog business logic - Handles all product-related operations.
//!
//! The catalog owns the collection of products available for quotation. Every
//! mutation settles in memory first and then re-serializes the whole
//! collection through the injected storage, so persisted state always matches
//! what callers observe.

use crate::{
    errors::{Error, Result},
    models::{Product, ProductInput, ProductUpdate, new_id},
    storage::{self, KeyValueStorage, keys},
};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Product catalog store.
pub struct CatalogStore {
    storage: Arc<dyn KeyValueStorage>,
    products: Vec<Product>,
}

impl CatalogStore {
    /// Opens the catalog, loading the persisted collection. A missing or
    /// corrupt collection loads as empty.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let products: Vec<Product> = storage::load_json_or_default(storage.as_ref(), keys::PRODUCTS);
        tracing::debug!(count = products.len(), "loaded product catalog");
        Self { storage, products }
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Finds a product by its unique id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Creates a new product, performing input validation.
    ///
    /// Assigns a fresh identifier and creation timestamp, appends the product
    /// to the collection, and persists it.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The product name is empty or whitespace-only
    /// - The unit price is negative
    /// - Persisting the collection fails
    pub fn add(&mut self, input: ProductInput) -> Result<Product> {
        if input.name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Product name cannot be empty".to_string(),
            });
        }
        if input.unit_price < Decimal::ZERO {
            return Err(Error::InvalidAmount { amount: input.unit_price });
        }

        let product = Product {
            id: new_id(),
            name: input.name.trim().to_string(),
            unit_price: input.unit_price,
            unit_type: input.unit_type,
            category: input.category,
            image_url: input.image_url,
            created_at: Utc::now(),
        };

        self.products.push(product.clone());
        self.persist()?;
        tracing::info!(id = %product.id, name = %product.name, "product added");
        Ok(product)
    }

    /// Merges the given fields into an existing product. The identifier and
    /// creation timestamp never change. Updating an unknown id is a no-op.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A new name is present but empty or whitespace-only
    /// - A new unit price is present but negative
    /// - Persisting the collection fails
    pub fn update(&mut self, id: &str, update: ProductUpdate) -> Result<()> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(Error::Validation {
                    message: "Product name cannot be empty".to_string(),
                });
            }
        }
        if let Some(price) = update.unit_price {
            if price < Decimal::ZERO {
                return Err(Error::InvalidAmount { amount: price });
            }
        }

        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(id, "update for unknown product ignored");
            return Ok(());
        };

        if let Some(name) = update.name {
            product.name = name.trim().to_string();
        }
        if let Some(price) = update.unit_price {
            product.unit_price = price;
        }
        if let Some(unit_type) = update.unit_type {
            product.unit_type = unit_type;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(image_url) = update.image_url {
            product.image_url = image_url;
        }

        self.persist()
    }

    /// Removes a product from the catalog. Deleting an unknown id is a no-op.
    ///
    /// Previously archived quotations keep their embedded product snapshots.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            tracing::debug!(id, "delete for unknown product ignored");
            return Ok(());
        }
        self.persist()?;
        tracing::info!(id, "product deleted");
        Ok(())
    }

    /// Unsets the given category label on every product carrying it, returning
    /// how many products were touched. The products themselves are kept.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn clear_category(&mut self, label: &str) -> Result<usize> {
        let mut cleared = 0;
        for product in &mut self.products {
            if product.category.as_deref() == Some(label) {
                product.category = None;
                cleared += 1;
            }
        }
        if cleared > 0 {
            self.persist()?;
            tracing::debug!(label, cleared, "cleared category from products");
        }
        Ok(cleared)
    }

    fn persist(&self) -> Result<()> {
        storage::store_json(self.storage.as_ref(), keys::PRODUCTS, &self.products)
    }
}

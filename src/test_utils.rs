//! Shared test utilities for `QuotePro`.
//!
//! This module provides common helper functions for setting up in-memory
//! storage and creating test records with sensible defaults.

use crate::{
    app::App,
    core::{CatalogStore, quotation},
    models::{
        Product, ProductInput, QuotationItem, QuotationTemplate, SavedQuotation, TemplateItem,
        UnitType, new_id,
    },
    storage::{KeyValueStorage, MemoryStorage},
};
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Creates an empty in-memory storage handle. This is the standard setup for
/// all store tests.
pub fn memory_storage() -> Arc<dyn KeyValueStorage> {
    Arc::new(MemoryStorage::new())
}

/// Creates an application over fresh in-memory storage.
pub fn setup_app() -> App {
    App::new(memory_storage())
}

/// Creates a catalog store over fresh in-memory storage.
pub fn setup_catalog() -> CatalogStore {
    CatalogStore::new(memory_storage())
}

/// Builds a product input with sensible defaults.
///
/// # Defaults
/// * `unit_type`: piece
/// * no category, no image
pub fn product_input(name: &str, unit_price: Decimal) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        unit_price,
        unit_type: UnitType::Piece,
        category: None,
        image_url: None,
    }
}

/// Builds a standalone product record without going through a store. Use this
/// for pure-engine tests that never touch persistence.
pub fn sample_product(name: &str, unit_price: Decimal) -> Product {
    Product {
        id: new_id(),
        name: name.to_string(),
        unit_price,
        unit_type: UnitType::Piece,
        category: None,
        image_url: None,
        created_at: Utc::now(),
    }
}

/// Wraps a product into a quotation line item.
pub fn quotation_item(product: Product, quantity: u32) -> QuotationItem {
    QuotationItem { product, quantity }
}

/// Builds a template referencing the given `(product_id, quantity)` pairs.
pub fn sample_template(
    name: &str,
    discount: Decimal,
    items: Vec<(&str, u32)>,
) -> QuotationTemplate {
    QuotationTemplate {
        id: new_id(),
        name: name.to_string(),
        discount,
        items: items
            .into_iter()
            .map(|(product_id, quantity)| TemplateItem {
                product_id: product_id.to_string(),
                quantity,
            })
            .collect(),
        created_at: Utc::now(),
    }
}

/// Builds a draft for the given customer: one line of 3 × $0.50 bolts in USD.
pub fn sample_draft(customer_name: &str, discount: Decimal) -> crate::models::QuotationDraft {
    let items = vec![quotation_item(sample_product("Bolt", dec!(0.50)), 3)];
    quotation::build_draft(customer_name, items, discount, "USD", None)
        .unwrap_or_else(|e| panic!("sample draft should build: {e}"))
}

/// Builds an archived quotation directly, without a store: one line of
/// 3 × $0.50 bolts in USD with the given discount.
pub fn sample_quotation(customer_name: &str, discount: Decimal) -> SavedQuotation {
    SavedQuotation::from_draft(sample_draft(customer_name, discount), new_id(), Utc::now())
}

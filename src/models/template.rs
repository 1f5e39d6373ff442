//! Quotation template - A reusable skeleton of product references.
//!
//! Unlike archived quotations, templates reference products by id. Loading a
//! template re-resolves every entry against the current catalog, so prices
//! are always current and entries for deleted products drop out silently.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One template entry: a product reference and a quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    /// Catalog product id; may no longer resolve
    pub product_id: String,
    /// Number of units, at least 1
    pub quantity: u32,
}

/// A named, reusable quotation skeleton.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationTemplate {
    /// Opaque unique identifier
    pub id: String,
    /// Template display name
    pub name: String,
    /// Discount percentage applied when the template is loaded, within [0, 100]
    pub discount: Decimal,
    /// Ordered product references
    pub items: Vec<TemplateItem>,
    /// When the template was saved
    pub created_at: DateTime<Utc>,
}

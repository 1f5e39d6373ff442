//! Quotation records - Line items, in-progress drafts, and archived
//! quotations.
//!
//! A line item embeds a full copy of its product rather than a reference.
//! The copy is taken when the item is added, so an archived quotation is a
//! faithful snapshot of the catalog at the moment of sale.

use crate::models::{CompanyInfo, Product};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a quotation: a product snapshot and a quantity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationItem {
    /// Product copy taken at the time the item was added
    pub product: Product,
    /// Number of units, at least 1
    pub quantity: u32,
}

impl QuotationItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.unit_price * Decimal::from(self.quantity)
    }
}

/// A quotation ready to be archived. The archive store assigns the identifier
/// and timestamp when the draft is saved.
#[derive(Clone, Debug, PartialEq)]
pub struct QuotationDraft {
    /// Customer the quotation is addressed to, never empty
    pub customer_name: String,
    /// Ordered line items with embedded product snapshots
    pub items: Vec<QuotationItem>,
    /// Discount percentage, within [0, 100]
    pub discount: Decimal,
    /// Sum of line totals at build time
    pub subtotal: Decimal,
    /// Subtotal after discount
    pub total: Decimal,
    /// Display currency code
    pub currency: String,
    /// Company profile snapshot taken at build time
    pub company_info: Option<CompanyInfo>,
}

/// An archived quotation. Immutable once saved; the only permitted operation
/// afterwards is deletion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuotation {
    /// Opaque unique identifier
    pub id: String,
    /// Customer the quotation is addressed to
    pub customer_name: String,
    /// Ordered line items with embedded product snapshots
    pub items: Vec<QuotationItem>,
    /// Discount percentage, within [0, 100]
    pub discount: Decimal,
    /// Sum of line totals at save time
    pub subtotal: Decimal,
    /// Subtotal after discount
    pub total: Decimal,
    /// Display currency code
    pub currency: String,
    /// Company profile as it was when the quotation was saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_info: Option<CompanyInfo>,
    /// When the quotation was archived
    pub created_at: DateTime<Utc>,
}

impl SavedQuotation {
    /// Finalizes a draft with a fresh identifier and timestamp.
    #[must_use]
    pub fn from_draft(draft: QuotationDraft, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: draft.customer_name,
            items: draft.items,
            discount: draft.discount,
            subtotal: draft.subtotal,
            total: draft.total,
            currency: draft.currency,
            company_info: draft.company_info,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::models::UnitType;
    use rust_decimal_macros::dec;

    fn bolt() -> Product {
        Product {
            id: "bolt-1".to_string(),
            name: "Bolt".to_string(),
            unit_price: dec!(0.50),
            unit_type: UnitType::Piece,
            category: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_line_total() {
        let item = QuotationItem { product: bolt(), quantity: 3 };
        assert_eq!(item.line_total(), dec!(1.50));
    }

    #[test]
    fn test_saved_quotation_serializes_camel_case() {
        let quotation = SavedQuotation {
            id: "q-1".to_string(),
            customer_name: "Acme".to_string(),
            items: vec![QuotationItem { product: bolt(), quantity: 2 }],
            discount: dec!(0),
            subtotal: dec!(1.00),
            total: dec!(1.00),
            currency: "USD".to_string(),
            company_info: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&quotation).unwrap();
        assert!(json.contains("\"customerName\":\"Acme\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("companyInfo"));

        let reloaded: SavedQuotation = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, quotation);
    }
}

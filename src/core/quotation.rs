//! Quotation computation - Pure functions over line items.
//!
//! Everything here is framework-agnostic arithmetic: no storage, no I/O.
//! Callers are responsible for clamping inputs (discount into [0, 100],
//! quantities to at least 1) before invoking the computation functions;
//! [`build_draft`] performs that clamping when assembling a persistable
//! draft.

use crate::{
    errors::{Error, Result},
    models::{CompanyInfo, Product, QuotationDraft, QuotationItem, QuotationTemplate},
};
use rust_decimal::Decimal;

/// Computed quotation amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Totals {
    /// Sum of line totals before discount
    pub subtotal: Decimal,
    /// Amount subtracted by the discount
    pub discount_amount: Decimal,
    /// Subtotal minus discount amount
    pub total: Decimal,
}

/// Computes subtotal, discount amount, and total for a list of line items.
///
/// The subtotal is the exact decimal sum of `unit_price * quantity` over all
/// items; no intermediate rounding takes place. An empty item list yields
/// zero for all three amounts. The discount percentage is applied as given,
/// without re-validation.
#[must_use]
pub fn compute_totals(items: &[QuotationItem], discount_pct: Decimal) -> Totals {
    let subtotal: Decimal = items.iter().map(QuotationItem::line_total).sum();
    let discount_amount = subtotal * discount_pct / Decimal::ONE_HUNDRED;

    Totals { subtotal, discount_amount, total: subtotal - discount_amount }
}

/// Adds products to an item list, merging with existing lines.
///
/// A product already present in the list has its quantity incremented by one
/// and keeps its position; new products are appended with quantity 1, in the
/// order supplied.
#[must_use]
pub fn merge_or_increment(
    existing: Vec<QuotationItem>,
    products_to_add: Vec<Product>,
) -> Vec<QuotationItem> {
    let mut items = existing;
    for product in products_to_add {
        if let Some(item) = items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            items.push(QuotationItem { product, quantity: 1 });
        }
    }
    items
}

/// Resolves a template against the current catalog.
///
/// Entries whose product id no longer exists are dropped silently; the
/// quantities and relative order of the remaining entries are preserved.
/// Resolved entries embed a fresh snapshot of the current product, so a
/// template always prices at current catalog rates.
#[must_use]
pub fn load_from_template(
    template: &QuotationTemplate,
    catalog: &[Product],
) -> Vec<QuotationItem> {
    template
        .items
        .iter()
        .filter_map(|entry| {
            catalog
                .iter()
                .find(|p| p.id == entry.product_id)
                .map(|p| QuotationItem { product: p.clone(), quantity: entry.quantity })
        })
        .collect()
}

/// Assembles a persistable quotation draft.
///
/// Trims the customer name, clamps the discount into [0, 100], computes the
/// totals, and snapshots the supplied company profile.
///
/// # Errors
/// Returns an error if:
/// - The customer name is empty or whitespace-only
/// - Any item has a quantity of zero
pub fn build_draft(
    customer_name: &str,
    items: Vec<QuotationItem>,
    discount_pct: Decimal,
    currency: &str,
    company_info: Option<CompanyInfo>,
) -> Result<QuotationDraft> {
    if customer_name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Customer name cannot be empty".to_string(),
        });
    }
    if items.iter().any(|i| i.quantity == 0) {
        return Err(Error::Validation {
            message: "Item quantities must be at least 1".to_string(),
        });
    }

    let discount = discount_pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let totals = compute_totals(&items, discount);

    Ok(QuotationDraft {
        customer_name: customer_name.trim().to_string(),
        items,
        discount,
        subtotal: totals.subtotal,
        total: totals.total,
        currency: currency.to_string(),
        company_info,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compute_totals_single_item_no_discount() {
        let items = vec![quotation_item(sample_product("Bolt", dec!(0.50)), 3)];

        let totals = compute_totals(&items, dec!(0));

        assert_eq!(totals.subtotal, dec!(1.50));
        assert_eq!(totals.discount_amount, dec!(0));
        assert_eq!(totals.total, dec!(1.50));
    }

    #[test]
    fn test_compute_totals_applies_discount() {
        let items = vec![quotation_item(sample_product("Panel", dec!(100)), 2)];

        let totals = compute_totals(&items, dec!(25));

        assert_eq!(totals.subtotal, dec!(200));
        assert_eq!(totals.discount_amount, dec!(50));
        assert_eq!(totals.total, dec!(150));
    }

    #[test]
    fn test_compute_totals_empty_items() {
        let totals = compute_totals(&[], dec!(25));

        assert_eq!(totals.subtotal, dec!(0));
        assert_eq!(totals.discount_amount, dec!(0));
        assert_eq!(totals.total, dec!(0));
    }

    #[test]
    fn test_compute_totals_exact_decimal_arithmetic() {
        // 3 × 0.50 = 1.50, 10% off = 0.15, total 1.35 — exact, no float drift
        let items = vec![quotation_item(sample_product("Bolt", dec!(0.50)), 3)];

        let totals = compute_totals(&items, dec!(10));

        assert_eq!(totals.subtotal, dec!(1.50));
        assert_eq!(totals.discount_amount, dec!(0.15));
        assert_eq!(totals.total, dec!(1.35));
    }

    #[test]
    fn test_merge_or_increment_increments_existing_line() {
        let bolt = sample_product("Bolt", dec!(0.50));

        let items = merge_or_increment(Vec::new(), vec![bolt.clone()]);
        let items = merge_or_increment(items, vec![bolt.clone()]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].product.id, bolt.id);
    }

    #[test]
    fn test_merge_or_increment_appends_new_products_in_order() {
        let bolt = sample_product("Bolt", dec!(0.50));
        let nut = sample_product("Nut", dec!(0.25));
        let washer = sample_product("Washer", dec!(0.10));

        let items = merge_or_increment(Vec::new(), vec![bolt.clone()]);
        let items = merge_or_increment(items, vec![nut.clone(), bolt.clone(), washer.clone()]);

        let names: Vec<&str> = items.iter().map(|i| i.product.name.as_str()).collect();
        assert_eq!(names, vec!["Bolt", "Nut", "Washer"]);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].quantity, 1);
        assert_eq!(items[2].quantity, 1);
    }

    #[test]
    fn test_merging_three_times_then_discounting() {
        // Add the same $0.50 bolt three times, then apply 10%
        let bolt = sample_product("Bolt", dec!(0.50));
        let mut items = Vec::new();
        for _ in 0..3 {
            items = merge_or_increment(items, vec![bolt.clone()]);
        }
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);

        let totals = compute_totals(&items, dec!(10));
        assert_eq!(totals.subtotal, dec!(1.50));
        assert_eq!(totals.discount_amount, dec!(0.15));
        assert_eq!(totals.total, dec!(1.35));
    }

    #[test]
    fn test_load_from_template_drops_missing_products() {
        let bolt = sample_product("Bolt", dec!(0.50));
        let nut = sample_product("Nut", dec!(0.25));
        let template = sample_template(
            "Kit",
            dec!(0),
            vec![("gone-id", 5), (&bolt.id, 2), (&nut.id, 4)],
        );

        let items = load_from_template(&template, &[bolt.clone(), nut.clone()]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product.id, bolt.id);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].product.id, nut.id);
        assert_eq!(items[1].quantity, 4);
    }

    #[test]
    fn test_load_from_template_prices_at_current_rates() {
        let mut bolt = sample_product("Bolt", dec!(0.50));
        let template = sample_template("Kit", dec!(0), vec![(&bolt.id, 2)]);

        // The catalog price changed after the template was saved
        bolt.unit_price = dec!(0.75);
        let items = load_from_template(&template, std::slice::from_ref(&bolt));

        assert_eq!(items[0].product.unit_price, dec!(0.75));
    }

    #[test]
    fn test_build_draft_computes_and_clamps() {
        let items = vec![quotation_item(sample_product("Bolt", dec!(0.50)), 3)];

        let draft = build_draft("  Acme  ", items, dec!(250), "USD", None).unwrap();

        assert_eq!(draft.customer_name, "Acme");
        assert_eq!(draft.discount, dec!(100));
        assert_eq!(draft.subtotal, dec!(1.50));
        assert_eq!(draft.total, dec!(0.00));
        assert_eq!(draft.currency, "USD");
    }

    #[test]
    fn test_build_draft_rejects_blank_customer() {
        let result = build_draft("   ", Vec::new(), dec!(0), "USD", None);
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
    }

    #[test]
    fn test_build_draft_rejects_zero_quantity() {
        let items = vec![quotation_item(sample_product("Bolt", dec!(0.50)), 0)];
        let result = build_draft("Acme", items, dec!(0), "USD", None);
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
    }
}
